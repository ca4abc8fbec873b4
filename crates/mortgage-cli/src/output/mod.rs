pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a leaf value for display, formatting the money fields with
/// separators and the currency symbol.
pub(crate) fn display_value(key: &str, value: &Value) -> String {
    if let Some(amount) = money_value(key, value) {
        return crate::format::format_money(amount);
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Money fields serialize as decimal strings; pick out the ones we know.
fn money_value(key: &str, value: &Value) -> Option<Decimal> {
    if !matches!(key, "monthly_payment" | "total_repayment") {
        return None;
    }
    value.as_str().and_then(|s| Decimal::from_str(s).ok())
}
