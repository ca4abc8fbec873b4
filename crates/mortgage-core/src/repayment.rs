//! Mortgage repayment engine.
//!
//! Computes the monthly payment and total repayment for the two quote
//! modes: a capital repayment mortgage (level-payment amortizing annuity)
//! and an interest-only mortgage with the principal due at term end.
//!
//! Repayment formula: M = P · r(1+r)^n / ((1+r)^n - 1), where r is the
//! monthly rate and n the number of monthly periods. At r = 0 the payment
//! degenerates to straight-line principal, P / n.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money, MortgageType, Rate, Years};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A single quote request. Constructed fresh per calculation; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentInput {
    /// Amount borrowed, in currency units. Must be greater than zero.
    pub principal: Money,
    /// Annual interest rate in percent (5.25 = 5.25%). Zero is allowed.
    pub annual_rate_pct: Rate,
    /// Term in years. Fractional terms are allowed and are not rounded.
    pub term_years: Years,
    /// Repayment basis for the quote.
    pub mortgage_type: MortgageType,
}

/// Repayment figures for one quote.
///
/// Both values carry exactly 2 decimal places, rounded half away from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentFigures {
    /// Level monthly payment over the term.
    pub monthly_payment: Money,
    /// Total paid over the full term. For interest-only quotes this
    /// includes the principal bullet due at maturity.
    pub total_repayment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Calculate the monthly payment and total repayment for a quote.
///
/// Preconditions are checked up front: principal > 0, term > 0, rate ≥ 0.
/// Violations return [`MortgageError::InvalidInput`] naming the field; the
/// function never panics. Callers working from raw form fields should gate
/// on [`crate::validation::validate`] first so every bad field can be
/// reported at once.
///
/// Both outputs are rounded to exactly 2 decimal places with
/// [`RoundingStrategy::MidpointAwayFromZero`]; the total is always derived
/// from the unrounded monthly payment.
pub fn calculate_repayment(
    input: &RepaymentInput,
) -> MortgageResult<ComputationOutput<RepaymentFigures>> {
    let start = Instant::now();
    validate_input(input)?;

    let mut warnings: Vec<String> = Vec::new();

    let monthly_rate = input.annual_rate_pct / PERCENT / MONTHS_PER_YEAR;
    let periods = input.term_years * MONTHS_PER_YEAR;

    let (monthly, total, methodology) = match input.mortgage_type {
        MortgageType::Repayment => {
            let monthly = if monthly_rate.is_zero() {
                warnings.push(
                    "Zero interest rate; monthly payment is straight-line principal.".into(),
                );
                input.principal / periods
            } else {
                annuity_payment(input.principal, monthly_rate, periods)?
            };
            (monthly, monthly * periods, "Fixed-rate amortizing annuity")
        }
        MortgageType::InterestOnly => {
            let monthly = input.principal * monthly_rate;
            if monthly_rate.is_zero() {
                warnings.push("Zero interest rate; interest-only payments are zero.".into());
            }
            (
                monthly,
                monthly * periods + input.principal,
                "Interest-only, principal due at term end",
            )
        }
    };

    let figures = RepaymentFigures {
        monthly_payment: round_currency(monthly),
        total_repayment: round_currency(total),
    };

    Ok(with_metadata(
        methodology,
        &json!({
            "monthly_rate": monthly_rate,
            "periods": periods,
            "rounding": "2dp, half away from zero",
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        figures,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Level payment that fully amortizes `principal` at monthly `rate` over
/// `periods` periods. Requires rate > 0.
fn annuity_payment(principal: Money, rate: Rate, periods: Decimal) -> MortgageResult<Money> {
    let growth = (Decimal::ONE + rate)
        .checked_powd(periods)
        .ok_or_else(|| MortgageError::Overflow {
            context: "compound growth factor".into(),
        })?;

    let annuity_factor = growth - Decimal::ONE;
    if annuity_factor.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * (rate * growth) / annuity_factor)
}

/// Round to 2 decimal places, half away from zero, rescaled to scale 2.
fn round_currency(value: Decimal) -> Money {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn validate_input(input: &RepaymentInput) -> MortgageResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "principal".into(),
            reason: "must be greater than zero".into(),
        });
    }
    if input.term_years <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "term_years".into(),
            reason: "must be greater than zero".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "must not be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(
        principal: Decimal,
        rate: Decimal,
        years: Decimal,
        mortgage_type: MortgageType,
    ) -> RepaymentInput {
        RepaymentInput {
            principal,
            annual_rate_pct: rate,
            term_years: years,
            mortgage_type,
        }
    }

    #[test]
    fn test_repayment_standard_quote() {
        let out =
            calculate_repayment(&quote(dec!(200000), dec!(5), dec!(25), MortgageType::Repayment))
                .unwrap();
        // 200k at 5% over 300 months: ~1169.18/month
        assert!((out.result.monthly_payment - dec!(1169.18)).abs() < dec!(0.01));
    }

    #[test]
    fn test_repayment_zero_rate_is_straight_line() {
        let out =
            calculate_repayment(&quote(dec!(200000), dec!(0), dec!(25), MortgageType::Repayment))
                .unwrap();
        // 200000 / 300 = 666.666... -> 666.67
        assert_eq!(out.result.monthly_payment, dec!(666.67));
        assert_eq!(out.result.total_repayment, dec!(200000.00));
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_interest_only_quote() {
        let out = calculate_repayment(&quote(
            dec!(200000),
            dec!(5),
            dec!(25),
            MortgageType::InterestOnly,
        ))
        .unwrap();
        // 200000 * 0.05 / 12 = 833.33; total = 833.33... * 300 + 200000
        assert_eq!(out.result.monthly_payment, dec!(833.33));
        assert_eq!(out.result.total_repayment, dec!(450000.00));
    }

    #[test]
    fn test_fractional_term_periods_not_rounded() {
        // 12.5 years = 150 monthly periods
        let out = calculate_repayment(&quote(
            dec!(150000),
            dec!(0),
            dec!(12.5),
            MortgageType::Repayment,
        ))
        .unwrap();
        assert_eq!(out.result.monthly_payment, dec!(1000.00));
    }

    #[test]
    fn test_rejects_zero_principal() {
        let err =
            calculate_repayment(&quote(dec!(0), dec!(5), dec!(25), MortgageType::Repayment))
                .unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let err = calculate_repayment(&quote(
            dec!(100000),
            dec!(-0.5),
            dec!(10),
            MortgageType::Repayment,
        ))
        .unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }
}
