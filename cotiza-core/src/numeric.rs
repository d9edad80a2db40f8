//! Parse-or-default coercion for the raw form fields.
//!
//! The input boundary hands over whatever the user typed, as a JSON string
//! or number. Policy: anything that is not a usable non-negative number
//! becomes 0. Negative values are treated as malformed rather than passed
//! through, and sales volumes clamp to an upper bound so currency
//! formatting stays in integer range.

use serde_json::Value;

/// Ceiling for accepted sales volume, in pesos.
pub const MAX_SALES_VOLUME: f64 = 1e12;

fn raw_f64(raw: &Value) -> f64 {
    match raw {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce a raw sales-volume field. Non-numeric, negative, or non-finite
/// input yields 0; values beyond [`MAX_SALES_VOLUME`] clamp to it.
pub fn sales_or_zero(raw: &Value) -> f64 {
    let parsed = raw_f64(raw);
    if !parsed.is_finite() || parsed < 0.0 {
        return 0.0;
    }
    parsed.min(MAX_SALES_VOLUME)
}

/// Coerce a raw SKU-count field. Fractional entries truncate toward zero.
pub fn skus_or_zero(raw: &Value) -> u32 {
    let parsed = raw_f64(raw);
    if !parsed.is_finite() || parsed < 0.0 {
        return 0;
    }
    parsed.min(u32::MAX as f64) as u32
}
