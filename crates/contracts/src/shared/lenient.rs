//! Tolerant readers for numeric response fields.
//!
//! A field the client cannot read as a number becomes `None` (shown as 0)
//! instead of failing the whole payload. Numeric strings such as Decimal
//! values (`"12345.67"`) and whole floats for counts (`100.0`) are accepted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::money::parse_money_input;

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_money_input(s),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn as_whole(value: &Value) -> Option<f64> {
    as_number(value).filter(|v| v.fract() == 0.0)
}

fn as_u64(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    as_whole(value)
        .filter(|v| *v >= 0.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64)
}

fn as_i64(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    as_whole(value)
        .filter(|v| *v >= i64::MIN as f64 && *v <= i64::MAX as f64)
        .map(|v| v as i64)
}

pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(as_number(&Value::deserialize(deserializer)?))
}

pub fn opt_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(as_u64(&Value::deserialize(deserializer)?))
}

pub fn opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(as_u64(&Value::deserialize(deserializer)?).and_then(|n| u32::try_from(n).ok()))
}

pub fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(as_i64(&Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(as_number(&json!(12.5)), Some(12.5));
        assert_eq!(as_number(&json!("12345.67")), Some(12345.67));
        assert_eq!(as_number(&json!("$1,200")), Some(1200.0));
        assert_eq!(as_number(&json!("n/a")), None);
        assert_eq!(as_number(&json!(null)), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!([1])), None);
    }

    #[test]
    fn test_counts_accept_whole_floats_only() {
        assert_eq!(as_u64(&json!(100)), Some(100));
        assert_eq!(as_u64(&json!(100.0)), Some(100));
        assert_eq!(as_u64(&json!("40")), Some(40));
        assert_eq!(as_u64(&json!(2.5)), None);
        assert_eq!(as_u64(&json!(-3)), None);
        assert_eq!(as_i64(&json!(-3)), Some(-3));
        assert_eq!(as_i64(&json!("77")), Some(77));
    }
}
