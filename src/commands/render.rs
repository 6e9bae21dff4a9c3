//! Rendering agent results on the console.

use hookshell_core::Console;
use serde_json::Value;

/// Console lines for an agent result: strings verbatim, arrays one item per
/// line, objects as pretty JSON, nothing for `null`.
pub fn render_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => s.lines().map(str::to_string).collect(),
        Value::Array(items) => items.iter().map(inline).collect(),
        Value::Object(_) => serde_json::to_string_pretty(value)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default(),
        Value::Bool(_) | Value::Number(_) => vec![value.to_string()],
    }
}

pub fn render(console: &Console, value: &Value) {
    for line in render_lines(value) {
        console.print(line);
    }
}

fn inline(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
