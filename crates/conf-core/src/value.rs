//! The abstract configuration tree consumed by the loader.

use std::collections::HashMap;

/// One node in a parsed configuration tree.
///
/// A node is a scalar, an ordered sequence of nodes, or a mapping of string
/// keys to nodes. The tree is immutable once handed to the loader; nothing in
/// the core mutates it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(HashMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Human-readable node kind, used in structural-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "a boolean",
            Self::Integer(_) => "an integer",
            Self::Float(_) => "a float",
            Self::String(_) => "a string",
            Self::Sequence(_) => "a sequence",
            Self::Mapping(_) => "a mapping",
        }
    }

    /// Returns the mapping entries if this node is a mapping.
    pub fn as_mapping(&self) -> Option<&HashMap<String, ConfigValue>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the sequence items if this node is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key if this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A parsed configuration: a root node plus an optional display name.
///
/// The name is used only for diagnostics (typically the source file stem);
/// an unnamed configuration is reported as "Anonymous Configuration".
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    root: ConfigValue,
    name: Option<String>,
}

impl Configuration {
    /// Create an anonymous configuration from a root node.
    pub fn new(root: ConfigValue) -> Self {
        Self { root, name: None }
    }

    /// Create a named configuration from a root node.
    pub fn named(root: ConfigValue, name: impl Into<String>) -> Self {
        Self {
            root,
            name: Some(name.into()),
        }
    }

    pub fn root(&self) -> &ConfigValue {
        &self.root
    }

    /// The declared display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Look up a top-level key, if the root is a mapping.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.root.get(key)
    }
}
