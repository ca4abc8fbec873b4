//! Display formatting for monetary values.
//!
//! Presentation only: the core returns plain 2-decimal values; thousands
//! separators and the currency symbol are applied here, at the edge.

use rust_decimal::Decimal;

/// Currency symbol used for display output. Quotes are single-currency.
pub const CURRENCY_SYMBOL: &str = "£";

/// Format an amount with comma thousands separators and the currency
/// symbol: 1169.18 -> "£1,169.18".
pub fn format_money(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}.{frac_part}")
    }
}
