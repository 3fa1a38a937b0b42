use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:[.,]\d*)?|[.,]\d+)(?:[eE][+-]?\d+)?)")
        .expect("leading number pattern is valid")
});

/// Reads a score out of an arbitrary JSON value.
///
/// Numbers are taken as-is. Strings contribute their leading numeric prefix, so
/// `"8.5/10"` and `"7,5"` both read as numbers. Everything else is 0.
pub fn coerce_score(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_leading_number(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

fn parse_leading_number(s: &str) -> Option<f64> {
    let captures = LEADING_NUMBER.captures(s)?;
    captures[1].replace(',', ".").parse::<f64>().ok()
}

/// Clamps into `[0, 10]` and rounds to one decimal. NaN becomes 0.
pub fn normalize_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return MIN_SCORE;
    }
    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    // + 0.0 turns -0.0 into 0.0
    (clamped * 10.0).round() / 10.0 + 0.0
}
