//! Raw-field validation for quote requests.
//!
//! The form adapter hands over the three fields exactly as captured. Each
//! field is parsed and judged independently, never short-circuited, so the
//! caller can surface every invalid field at once. Parsing is strict
//! decimal parsing: an optional sign, digits and at most one decimal
//! point. Anything else rejects the field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::{Money, Rate, Years};

/// Per-field validity flags for one quote request.
///
/// A flag is `true` when that field failed validation. There is no
/// ordering or priority between fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Amount missing, non-numeric, or not greater than zero.
    pub amount_invalid: bool,
    /// Term missing, non-numeric, or not greater than zero.
    pub term_invalid: bool,
    /// Rate missing, non-numeric, or negative. Zero is valid.
    pub rate_invalid: bool,
}

impl ValidationOutcome {
    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        !(self.amount_invalid || self.term_invalid || self.rate_invalid)
    }

    /// Names of the fields that failed, in form order.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.amount_invalid {
            fields.push("amount");
        }
        if self.term_invalid {
            fields.push("term");
        }
        if self.rate_invalid {
            fields.push("rate");
        }
        fields
    }
}

/// Parsed field values, produced only when every field is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedFields {
    pub amount: Money,
    pub term: Years,
    pub rate: Rate,
}

/// Judge the three raw fields without producing values.
pub fn validate(raw_amount: &str, raw_term: &str, raw_rate: &str) -> ValidationOutcome {
    match parse_fields(raw_amount, raw_term, raw_rate) {
        Ok(_) => ValidationOutcome::default(),
        Err(outcome) => outcome,
    }
}

/// Parse and judge all three fields at once.
///
/// `Ok` iff every flag is clear; `Err` carries the full flag set. There
/// are no partial results: either all three values come back or none do.
pub fn parse_fields(
    raw_amount: &str,
    raw_term: &str,
    raw_rate: &str,
) -> Result<ParsedFields, ValidationOutcome> {
    let amount = parse_decimal(raw_amount);
    let term = parse_decimal(raw_term);
    let rate = parse_decimal(raw_rate);

    let outcome = ValidationOutcome {
        amount_invalid: amount.map_or(true, |v| v <= Decimal::ZERO),
        term_invalid: term.map_or(true, |v| v <= Decimal::ZERO),
        rate_invalid: rate.map_or(true, |v| v < Decimal::ZERO),
    };

    match (amount, term, rate) {
        (Some(amount), Some(term), Some(rate)) if outcome.is_valid() => Ok(ParsedFields {
            amount,
            term,
            rate,
        }),
        _ => Err(outcome),
    }
}

/// Strict decimal parse of one raw field. Whitespace around the value is
/// tolerated; trailing garbage is not.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_fields_clear_all_flags() {
        let outcome = validate("250000", "25", "5.25");
        assert!(outcome.is_valid());
        assert_eq!(outcome, ValidationOutcome::default());
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let outcome = validate("250000", "25", "0");
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_each_field_judged_independently() {
        // A bad amount must not mask the term and rate checks
        let outcome = validate("abc", "0", "-1");
        assert!(outcome.amount_invalid);
        assert!(outcome.term_invalid);
        assert!(outcome.rate_invalid);
    }

    #[test]
    fn test_zero_amount_flags_amount_only() {
        let outcome = validate("0", "25", "5");
        assert!(outcome.amount_invalid);
        assert!(!outcome.term_invalid);
        assert!(!outcome.rate_invalid);
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        assert!(validate("12abc", "25", "5").amount_invalid);
        assert!(validate("1.2.3", "25", "5").amount_invalid);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert!(validate(" 250000 ", " 25 ", " 5 ").is_valid());
    }

    #[test]
    fn test_parse_fields_returns_all_values() {
        let fields = parse_fields("250000", "25", "5.25").unwrap();
        assert_eq!(fields.amount, dec!(250000));
        assert_eq!(fields.term, dec!(25));
        assert_eq!(fields.rate, dec!(5.25));
    }

    #[test]
    fn test_parse_fields_carries_flags_on_failure() {
        let outcome = parse_fields("250000", "", "5").unwrap_err();
        assert!(outcome.term_invalid);
        assert!(!outcome.amount_invalid);
        assert!(!outcome.rate_invalid);
    }
}
