use serde_json::{Map, Value};

use crate::config::Jurisdiction;

/// Whether any of the jurisdiction's keys holds its value. Strings compare trimmed;
/// numbers compare numerically against a numeric value (`"34"` matches `34`).
/// With no jurisdiction configured every feature belongs.
pub fn in_jurisdiction(properties: &Map<String, Value>, jurisdiction: Option<&Jurisdiction>) -> bool {
    let Some(jurisdiction) = jurisdiction else { return true };
    let want = jurisdiction.value.trim();
    jurisdiction.keys.iter().any(|key| match properties.get(key) {
        Some(Value::String(s)) => s.trim() == want,
        Some(Value::Number(n)) => match (n.as_f64(), want.parse::<f64>()) {
            (Some(have), Ok(want)) => have == want,
            _ => false,
        },
        _ => false,
    })
}
