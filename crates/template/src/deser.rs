//! Lenient numeric deserializers for designer-authored coordinates.
//!
//! Coordinates may arrive as JSON numbers or as numeric strings with an
//! optional `px` suffix (`"120"`, `"120px"`). Anything else is rejected.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

fn parse_length(value: &Value) -> Result<f32, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|f| f as f32)
            .ok_or_else(|| format!("invalid number {}", n)),
        Value::String(s) => {
            let s = s.trim();
            let numeric = s.strip_suffix("px").unwrap_or(s).trim();
            numeric
                .parse::<f32>()
                .map_err(|_| format!("expected a number, got \"{}\"", s))
        }
        other => Err(format!("expected a number, got {}", other)),
    }
}

pub fn length<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_length(&value).map_err(de::Error::custom)
}

pub fn optional_length<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_length(&value).map(Some).map_err(de::Error::custom),
    }
}
