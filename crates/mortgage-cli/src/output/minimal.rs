use serde_json::Value;

use super::display_value;

/// Print just the headline figures: the monthly payment, then the total
/// repayment. Falls back to the first field for non-quote output.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result {
        if let Some(monthly) = map.get("monthly_payment") {
            println!("{}", display_value("monthly_payment", monthly));
            if let Some(total) = map.get("total_repayment") {
                println!("{}", display_value("total_repayment", total));
            }
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(key, val));
            return;
        }
    }

    println!("{}", result);
}
