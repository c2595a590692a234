//! JSON front end using serde_json.

use std::collections::HashMap;

use conf_core::ConfigValue;
use serde_json::Value as JsonValue;

use crate::error::{FormatError, Result};
use crate::format::Format;

pub(crate) fn parse(source: &str) -> Result<ConfigValue> {
    let value: JsonValue =
        serde_json::from_str(source).map_err(|e| FormatError::parse(Format::Json, e.to_string()))?;
    convert(value)
}

fn convert(value: JsonValue) -> Result<ConfigValue> {
    Ok(match value {
        JsonValue::Null => ConfigValue::Null,
        JsonValue::Bool(flag) => ConfigValue::Bool(flag),
        JsonValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                ConfigValue::Integer(int)
            } else if number.is_u64() {
                // u64 beyond i64::MAX has no lossless representation in the
                // tree; falling back to f64 would truncate silently.
                return Err(FormatError::parse(
                    Format::Json,
                    format!("integer {number} is out of supported range"),
                ));
            } else if let Some(float) = number.as_f64() {
                ConfigValue::Float(float)
            } else {
                return Err(FormatError::parse(
                    Format::Json,
                    format!("number {number} is out of supported range"),
                ));
            }
        }
        JsonValue::String(text) => ConfigValue::String(text),
        JsonValue::Array(items) => {
            let converted: Result<Vec<ConfigValue>> = items.into_iter().map(convert).collect();
            ConfigValue::Sequence(converted?)
        }
        JsonValue::Object(entries) => {
            let mut map = HashMap::with_capacity(entries.len());
            for (key, item) in entries {
                map.insert(key, convert(item)?);
            }
            ConfigValue::Mapping(map)
        }
    })
}
