use clap::{Args, ValueEnum};
use colored::Colorize;
use serde_json::Value;

use mortgage_core::repayment::{calculate_repayment, RepaymentInput};
use mortgage_core::types::MortgageType;
use mortgage_core::validation;

use crate::input;

/// Arguments for a repayment calculation
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Mortgage amount in currency units; separators and a currency symbol
    /// are tolerated ("250000", "250,000.50", "£180000")
    #[arg(long, alias = "principal")]
    pub amount: Option<String>,

    /// Mortgage term in years (fractional terms allowed)
    #[arg(long)]
    pub term: Option<String>,

    /// Annual interest rate in percent; zero is allowed
    #[arg(long)]
    pub rate: Option<String>,

    /// Repayment basis
    #[arg(long = "type", value_enum, default_value = "repayment")]
    pub mortgage_type: MortgageTypeArg,
}

/// Arguments for raw-field validation
#[derive(Args)]
pub struct ValidateArgs {
    /// Mortgage amount field exactly as captured
    #[arg(long, default_value = "")]
    pub amount: String,

    /// Term field exactly as captured
    #[arg(long, default_value = "")]
    pub term: String,

    /// Rate field exactly as captured
    #[arg(long, default_value = "")]
    pub rate: String,
}

/// Repayment basis flag values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MortgageTypeArg {
    /// Level payments covering interest and principal
    Repayment,
    /// Interest-only payments, principal due at term end
    InterestOnly,
}

impl From<MortgageTypeArg> for MortgageType {
    fn from(arg: MortgageTypeArg) -> Self {
        match arg {
            MortgageTypeArg::Repayment => MortgageType::Repayment,
            MortgageTypeArg::InterestOnly => MortgageType::InterestOnly,
        }
    }
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote: RepaymentInput = if let Some(ref path) = args.input {
        input::read_file(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        quote_from_flags(&args)?
    };

    let output = calculate_repayment(&quote)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let amount = sanitize_amount(&args.amount);
    let outcome = validation::validate(&amount, &args.term, &args.rate);

    let mut value = serde_json::to_value(outcome)?;
    if let Value::Object(ref mut map) = value {
        map.insert("valid".into(), Value::Bool(outcome.is_valid()));
    }
    Ok(value)
}

/// Build a quote from the individual flags: sanitize the amount the way the
/// form does, then validate all three fields so every bad one is reported
/// in a single pass.
fn quote_from_flags(args: &CalculateArgs) -> Result<RepaymentInput, Box<dyn std::error::Error>> {
    let raw_amount = args
        .amount
        .as_deref()
        .ok_or("--amount is required (or provide --input)")?;
    let raw_term = args
        .term
        .as_deref()
        .ok_or("--term is required (or provide --input)")?;
    let raw_rate = args
        .rate
        .as_deref()
        .ok_or("--rate is required (or provide --input)")?;

    let amount = sanitize_amount(raw_amount);
    match validation::parse_fields(&amount, raw_term, raw_rate) {
        Ok(fields) => Ok(RepaymentInput {
            principal: fields.amount,
            annual_rate_pct: fields.rate,
            term_years: fields.term,
            mortgage_type: args.mortgage_type.into(),
        }),
        Err(outcome) => {
            for field in outcome.invalid_fields() {
                eprintln!(
                    "{} {}",
                    format!("--{field}:").red().bold(),
                    field_message(field),
                );
            }
            Err("one or more fields are invalid".into())
        }
    }
}

/// Strip everything that is not a digit or a decimal point, so amounts can
/// be entered the way a form displays them ("1,250,000.50", "£200000").
fn sanitize_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn field_message(field: &str) -> &'static str {
    match field {
        "rate" => "must be a number, zero or greater",
        _ => "must be a number greater than zero",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_separators_and_symbols() {
        assert_eq!(sanitize_amount("£1,250,000.50"), "1250000.50");
        assert_eq!(sanitize_amount("250 000"), "250000");
    }

    #[test]
    fn test_sanitize_leaves_plain_numbers_alone() {
        assert_eq!(sanitize_amount("200000.75"), "200000.75");
    }

    #[test]
    fn test_quote_from_flags_requires_every_field() {
        let args = CalculateArgs {
            input: None,
            amount: Some("200000".into()),
            term: None,
            rate: Some("5".into()),
            mortgage_type: MortgageTypeArg::Repayment,
        };
        let err = quote_from_flags(&args).unwrap_err();
        assert!(err.to_string().contains("--term"));
    }

    #[test]
    fn test_quote_from_flags_builds_typed_input() {
        let args = CalculateArgs {
            input: None,
            amount: Some("£200,000".into()),
            term: Some("25".into()),
            rate: Some("5".into()),
            mortgage_type: MortgageTypeArg::InterestOnly,
        };
        let quote = quote_from_flags(&args).unwrap();
        assert_eq!(quote.mortgage_type, MortgageType::InterestOnly);
        assert_eq!(quote.principal.to_string(), "200000");
    }
}
