//! Forgiving field decoders for project files.
//!
//! A project file is typed in by hand, so a bad cell must never abort an
//! evaluation: numbers fall back to 0, text to "", flags to false and
//! choices to their default variant.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use toml::Value;

pub fn number(value: &Value) -> f64 {
    let raw = match value {
        Value::Integer(i) => *i as f64,
        Value::Float(f) => *f,
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() {
        raw
    } else {
        0.0
    }
}

/// Clamp to a finite, non-negative amount.
pub fn non_negative_value(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Finite but possibly negative, used for profit.
pub fn signed_value(raw: f64) -> f64 {
    if raw.is_finite() {
        raw
    } else {
        0.0
    }
}

pub fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(non_negative_value(number(&value)))
}

pub fn signed<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(signed_value(number(&value)))
}

pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = non_negative_value(number(&value)).floor();
    Ok(raw.min(u32::MAX as f64) as u32)
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.trim().to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        _ => String::new(),
    })
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Boolean(b) => b,
        Value::Integer(i) => i != 0,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1" | "是"
        ),
        _ => false,
    })
}

pub fn choice<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
