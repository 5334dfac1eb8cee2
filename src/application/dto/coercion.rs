//! Lenient number parsing for host data
//!
//! Sheet inputs are often stored as strings, and older documents carry nulls
//! or nested `{ value }` objects. Anything that cannot be read as an integer
//! becomes zero so a roll can still be prepared.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer value of a JSON scalar. Floats truncate, strings parse their
/// leading integer (`"3 dice"` is 3), everything else is zero.
pub fn coerce_i32(value: &Value) -> i32 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(saturate)
            .or_else(|| n.as_f64().map(|f| f.trunc() as i32))
            .unwrap_or(0),
        Value::String(s) => parse_leading_int(s),
        _ => 0,
    }
}

/// Like [`coerce_i32`], but also unwraps `{ "value": n }` objects
pub fn coerce_value_field(value: &Value) -> i32 {
    match value {
        Value::Object(map) => map.get("value").map(coerce_i32).unwrap_or(0),
        other => coerce_i32(other),
    }
}

fn saturate(n: i64) -> i32 {
    i32::try_from(n).unwrap_or(if n < 0 { i32::MIN } else { i32::MAX })
}

fn parse_leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    saturate(if negative { -magnitude } else { magnitude })
}

pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_i32(&Value::deserialize(deserializer)?))
}

pub fn lenient_value_field<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_value_field(&Value::deserialize(deserializer)?))
}

/// Field default when the host stored `null`
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Modifier map, or `None` when absent or not an object
pub fn lenient_modifier_map<'de, D>(deserializer: D) -> Result<Option<HashMap<String, i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(
            map.iter()
                .map(|(key, value)| (key.clone(), coerce_i32(value)))
                .collect(),
        ),
        _ => None,
    })
}

/// String field that tolerates null and non-string scalars
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_numbers_and_strings() {
        assert_eq!(coerce_i32(&json!(3)), 3);
        assert_eq!(coerce_i32(&json!(-2)), -2);
        assert_eq!(coerce_i32(&json!(2.9)), 2);
        assert_eq!(coerce_i32(&json!("4")), 4);
        assert_eq!(coerce_i32(&json!(" -1 ")), -1);
        assert_eq!(coerce_i32(&json!("3 dice")), 3);
        assert_eq!(coerce_i32(&json!("+2")), 2);
    }

    #[test]
    fn test_coercion_failures_are_zero() {
        assert_eq!(coerce_i32(&json!("many")), 0);
        assert_eq!(coerce_i32(&json!("")), 0);
        assert_eq!(coerce_i32(&json!("-")), 0);
        assert_eq!(coerce_i32(&json!(null)), 0);
        assert_eq!(coerce_i32(&json!(true)), 0);
        assert_eq!(coerce_i32(&json!([1, 2])), 0);
    }

    #[test]
    fn test_large_values_saturate() {
        assert_eq!(coerce_i32(&json!(10_000_000_000i64)), i32::MAX);
        assert_eq!(coerce_i32(&json!("-99999999999999999999")), i32::MIN);
    }

    #[test]
    fn test_value_field_unwraps_objects() {
        assert_eq!(coerce_value_field(&json!({ "value": "5" })), 5);
        assert_eq!(coerce_value_field(&json!({ "max": 5 })), 0);
        assert_eq!(coerce_value_field(&json!(2)), 2);
    }
}
