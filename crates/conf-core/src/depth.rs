//! Immutable descent-path tracking for load diagnostics.
//!
//! A [`DepthTracker`] records the sequence of structural steps (mapping key
//! or sequence index) taken while descending into a configuration tree, and
//! renders a human-readable location string on demand. Trackers are
//! persistent: extending one never mutates the receiver, so a tracker can be
//! shared freely across recursive calls.

use crate::value::Configuration;

/// One structural step in a descent path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    /// A mapping-key descent, e.g. `server`.
    Entry(String),
    /// A sequence-index descent, e.g. `[3]`.
    Index(usize),
}

impl Level {
    /// The identifier rendered for this level.
    fn identify(&self) -> String {
        match self {
            Self::Entry(name) => name.clone(),
            Self::Index(index) => format!("[{index}]"),
        }
    }

    /// The glue rendered before this level's identifier when it is not the
    /// first level. Indices carry their own brackets, so they join bare.
    fn join_descriptor(&self) -> &'static str {
        match self {
            Self::Entry(_) => ".",
            Self::Index(_) => "",
        }
    }
}

/// Immutable accumulator for the path taken into a configuration.
#[derive(Debug, Clone)]
pub struct DepthTracker {
    levels: Vec<Level>,
    configuration_name: Option<String>,
}

impl DepthTracker {
    /// A tracker rooted at the given configuration, with no levels yet.
    pub fn root(configuration: &Configuration) -> Self {
        Self {
            levels: Vec::new(),
            configuration_name: configuration.name().map(str::to_string),
        }
    }

    /// Returns a new tracker with `level` appended. The receiver is unchanged.
    pub fn with(&self, level: Level) -> Self {
        let mut levels = self.levels.clone();
        levels.push(level);
        Self {
            levels,
            configuration_name: self.configuration_name.clone(),
        }
    }

    /// Extend with a sequence-index level.
    pub fn index(&self, index: usize) -> Self {
        self.with(Level::Index(index))
    }

    /// Extend with a mapping-key level.
    pub fn entry(&self, name: impl Into<String>) -> Self {
        self.with(Level::Entry(name.into()))
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Render the descent path, e.g. `servers[2].host`.
    ///
    /// The first level emits only its identifier; every later level emits its
    /// join glue first. The rendering is a pure function of the level
    /// sequence.
    pub fn path_descriptor(&self) -> String {
        let mut descriptor = String::new();
        for (depth, level) in self.levels.iter().enumerate() {
            if depth > 0 {
                descriptor.push_str(level.join_descriptor());
            }
            descriptor.push_str(&level.identify());
        }
        descriptor
    }

    /// The originating configuration's display name, or a placeholder.
    pub fn configuration_name(&self) -> String {
        self.configuration_name
            .clone()
            .unwrap_or_else(|| "Anonymous Configuration".to_string())
    }
}
