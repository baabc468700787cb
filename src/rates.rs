//! Rate specification normalization.
//!
//! The data source is deliberately loose: a rate may be a bare number
//! (legacy format) or an object carrying any subset of low/mid/high, with
//! min/max accepted as synonyms. Everything funnels through `as_range`
//! into a `RateRange` before any arithmetic happens.

use crate::models::{RateRange, RateSpec};
use serde_json::{Map, Value};

/// Normalize a raw rate specification into a `RateRange`.
///
/// A bare number is treated as the mid rate with bounds at 75% and 125% of
/// it. An object pulls `low`/`min` and `high`/`max` (an explicit JSON null
/// falls through to the synonym like an absent field) and, when `mid` is
/// missing, derives it as the average of the bounds if both are non-zero,
/// else 0. Returns `None` for absent or unusable specs so the caller can
/// substitute a default range. Never panics; malformed numeric fields
/// coerce to 0.
pub fn as_range(spec: Option<&RateSpec>) -> Option<RateRange> {
    match spec? {
        Value::Number(n) => {
            let mid = n.as_f64().unwrap_or(0.0);
            Some(RateRange::new(mid * 0.75, mid, mid * 1.25))
        }
        Value::Object(fields) => {
            let low = bound(fields, "low", "min");
            let high = bound(fields, "high", "max");
            let mid = match present(fields, "mid") {
                Some(value) => coerce_num(value),
                None if low != 0.0 && high != 0.0 => (low + high) / 2.0,
                None => 0.0,
            };
            Some(RateRange::new(low, mid, high))
        }
        _ => None,
    }
}

/// Defensive numeric coercion: numbers pass through, numeric strings parse,
/// bools map to 1/0, and anything else (including strings that do not parse
/// to a finite number) is 0.
pub fn coerce_num(value: &RateSpec) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Field lookup where an explicit JSON null counts as absent.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn bound(fields: &Map<String, Value>, key: &str, synonym: &str) -> f64 {
    present(fields, key)
        .or_else(|| present(fields, synonym))
        .map(coerce_num)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_number_spreads_bounds_around_mid() {
        let range = as_range(Some(&json!(2.0))).expect("range");
        assert_eq!(range.low, 1.5);
        assert_eq!(range.mid, 2.0);
        assert_eq!(range.high, 2.5);
    }

    #[test]
    fn bare_zero_collapses_to_zero_range() {
        let range = as_range(Some(&json!(0))).expect("range");
        assert_eq!(range, RateRange::default());
    }

    #[test]
    fn negative_bare_number_is_not_reordered() {
        let range = as_range(Some(&json!(-4.0))).expect("range");
        assert_eq!(range, RateRange::new(-3.0, -4.0, -5.0));
    }

    #[test]
    fn object_without_mid_averages_bounds() {
        let range = as_range(Some(&json!({ "low": 2.0, "high": 4.0 }))).expect("range");
        assert_eq!(range, RateRange::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn min_max_synonyms_match_low_high() {
        let range = as_range(Some(&json!({ "min": 2.0, "max": 4.0 }))).expect("range");
        assert_eq!(range, RateRange::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn named_field_wins_over_synonym() {
        let range = as_range(Some(&json!({ "low": 1.0, "min": 9.0, "high": 4.0 }))).expect("range");
        assert_eq!(range.low, 1.0);
    }

    #[test]
    fn null_low_falls_through_to_min() {
        let spec = json!({ "low": null, "min": 2.0, "high": 4.0 });
        let range = as_range(Some(&spec)).expect("range");
        assert_eq!(range.low, 2.0);
    }

    #[test]
    fn zero_bound_skips_the_average() {
        let range = as_range(Some(&json!({ "low": 0.0, "high": 4.0 }))).expect("range");
        assert_eq!(range.mid, 0.0);
    }

    #[test]
    fn explicit_mid_is_not_clamped() {
        let spec = json!({ "low": 1.0, "mid": 99.0, "high": 2.0 });
        let range = as_range(Some(&spec)).expect("range");
        assert_eq!(range, RateRange::new(1.0, 99.0, 2.0));
    }

    #[test]
    fn absent_and_null_yield_none() {
        assert!(as_range(None).is_none());
        assert!(as_range(Some(&Value::Null)).is_none());
    }

    #[test]
    fn unusable_shapes_yield_none() {
        assert!(as_range(Some(&json!("4.0"))).is_none());
        assert!(as_range(Some(&json!(true))).is_none());
        assert!(as_range(Some(&json!([1.0, 2.0]))).is_none());
    }

    #[test]
    fn malformed_fields_coerce_to_zero() {
        let range = as_range(Some(&json!({ "low": "garbage", "high": 4.0 }))).expect("range");
        assert_eq!(range.low, 0.0);
        assert_eq!(range.high, 4.0);
        // one bound is zero, so no average either
        assert_eq!(range.mid, 0.0);
    }

    #[test]
    fn numeric_strings_parse_into_bounds() {
        let range = as_range(Some(&json!({ "low": " 2.5 ", "high": "4.5" }))).expect("range");
        assert_eq!(range, RateRange::new(2.5, 3.5, 4.5));
    }

    #[test]
    fn coercion_covers_scalar_shapes() {
        assert_eq!(coerce_num(&json!(2.5)), 2.5);
        assert_eq!(coerce_num(&json!("3.25")), 3.25);
        assert_eq!(coerce_num(&json!("")), 0.0);
        assert_eq!(coerce_num(&json!("NaN")), 0.0);
        assert_eq!(coerce_num(&json!(true)), 1.0);
        assert_eq!(coerce_num(&json!(false)), 0.0);
        assert_eq!(coerce_num(&Value::Null), 0.0);
        assert_eq!(coerce_num(&json!({ "nested": 1.0 })), 0.0);
    }
}
