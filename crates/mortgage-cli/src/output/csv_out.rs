use serde_json::Value;
use std::io;

/// Write the result as two-column CSV (field, value) to stdout. Values are
/// kept machine-readable: no separators, no currency symbol.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let rows = match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => result,
            _ => map,
        },
        other => {
            let _ = wtr.write_record([&format_csv_value(other)]);
            let _ = wtr.flush();
            return;
        }
    };

    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in rows {
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
    }
    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
