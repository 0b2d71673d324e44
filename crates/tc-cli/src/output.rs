//! Rendering of step results for stdout.

use crate::StepOutcome;

use serde_json::Value;

/// Compact or pretty JSON for one value
pub fn render_json(value: &Value, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    } else {
        value.to_string()
    }
}

/// `<heading>: <json>` for one completed step
pub fn render_step(outcome: &StepOutcome, pretty: bool) -> String {
    format!("{}: {}", outcome.heading(), render_json(outcome.value(), pretty))
}

pub fn print_step(outcome: &StepOutcome, pretty: bool) {
    println!("{}", render_step(outcome, pretty));
}
