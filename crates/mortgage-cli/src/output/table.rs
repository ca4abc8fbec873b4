use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::display_value;

/// Render the computation envelope as a field/value table, followed by any
/// warnings and the methodology line. Non-envelope output (for example a
/// validation outcome) renders as a flat table.
pub fn print_table(value: &Value) {
    let map = match value.as_object() {
        Some(map) => map,
        None => {
            println!("{}", value);
            return;
        }
    };

    let rows = match map.get("result") {
        Some(Value::Object(result)) => result,
        _ => map,
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in rows {
        builder.push_record([key.as_str(), &display_value(key, val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(s) = warning {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = map.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}
