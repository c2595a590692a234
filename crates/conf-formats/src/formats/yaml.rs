//! YAML front end using serde_yaml.

use std::collections::HashMap;

use conf_core::ConfigValue;
use serde_yaml::Value as YamlValue;

use crate::error::{FormatError, Result};
use crate::format::Format;

pub(crate) fn parse(source: &str) -> Result<ConfigValue> {
    let value: YamlValue =
        serde_yaml::from_str(source).map_err(|e| FormatError::parse(Format::Yaml, e.to_string()))?;
    convert(value)
}

fn convert(value: YamlValue) -> Result<ConfigValue> {
    Ok(match value {
        YamlValue::Null => ConfigValue::Null,
        YamlValue::Bool(flag) => ConfigValue::Bool(flag),
        YamlValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                ConfigValue::Integer(int)
            } else if number.is_u64() {
                // u64 beyond i64::MAX has no lossless representation in the
                // tree; falling back to f64 would truncate silently.
                return Err(FormatError::parse(
                    Format::Yaml,
                    format!("integer {number} is out of supported range"),
                ));
            } else if let Some(float) = number.as_f64() {
                ConfigValue::Float(float)
            } else {
                return Err(FormatError::parse(
                    Format::Yaml,
                    format!("number {number} is out of supported range"),
                ));
            }
        }
        YamlValue::String(text) => ConfigValue::String(text),
        YamlValue::Sequence(items) => {
            let converted: Result<Vec<ConfigValue>> = items.into_iter().map(convert).collect();
            ConfigValue::Sequence(converted?)
        }
        YamlValue::Mapping(entries) => {
            let mut map = HashMap::with_capacity(entries.len());
            for (key, item) in entries {
                let YamlValue::String(key) = key else {
                    return Err(FormatError::NonStringKey {
                        format: Format::Yaml,
                        key: format!("{key:?}"),
                    });
                };
                map.insert(key, convert(item)?);
            }
            ConfigValue::Mapping(map)
        }
        // Tags carry no structure of their own; unwrap to the inner value.
        YamlValue::Tagged(tagged) => convert(tagged.value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalars_and_nesting() {
        let root = parse("name: base\ncount: 3\nratio: 0.5\nflags:\n  - true\n  - false\n").unwrap();
        assert_eq!(root.get("name"), Some(&ConfigValue::from("base")));
        assert_eq!(root.get("count"), Some(&ConfigValue::Integer(3)));
        assert_eq!(root.get("ratio"), Some(&ConfigValue::Float(0.5)));
        assert_eq!(
            root.get("flags"),
            Some(&ConfigValue::Sequence(vec![
                ConfigValue::Bool(true),
                ConfigValue::Bool(false),
            ]))
        );
    }

    #[test]
    fn test_null_value() {
        let root = parse("empty: ~\n").unwrap();
        assert_eq!(root.get("empty"), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_non_string_key_rejected() {
        let error = parse("1: one\n").unwrap_err();
        assert!(matches!(error, FormatError::NonStringKey { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let error = parse("key: [unclosed\n").unwrap_err();
        assert!(matches!(error, FormatError::Parse { .. }));
    }
}
