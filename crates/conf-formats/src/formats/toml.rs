//! TOML front end using the toml crate.

use std::collections::HashMap;

use conf_core::ConfigValue;
use toml::Value as TomlValue;

use crate::error::{FormatError, Result};
use crate::format::Format;

pub(crate) fn parse(source: &str) -> Result<ConfigValue> {
    let value: TomlValue =
        source.parse().map_err(|e: toml::de::Error| FormatError::parse(Format::Toml, e.to_string()))?;
    Ok(convert(value))
}

fn convert(value: TomlValue) -> ConfigValue {
    match value {
        TomlValue::Boolean(flag) => ConfigValue::Bool(flag),
        TomlValue::Integer(int) => ConfigValue::Integer(int),
        TomlValue::Float(float) => ConfigValue::Float(float),
        TomlValue::String(text) => ConfigValue::String(text),
        // TOML has no null; datetimes pass through as their text form.
        TomlValue::Datetime(datetime) => ConfigValue::String(datetime.to_string()),
        TomlValue::Array(items) => {
            ConfigValue::Sequence(items.into_iter().map(convert).collect())
        }
        TomlValue::Table(entries) => {
            let map: HashMap<String, ConfigValue> = entries
                .into_iter()
                .map(|(key, item)| (key, convert(item)))
                .collect();
            ConfigValue::Mapping(map)
        }
    }
}
