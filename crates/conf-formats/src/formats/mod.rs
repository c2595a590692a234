//! Per-format conversion into the abstract tree.

pub(crate) mod json;
pub(crate) mod toml;
pub(crate) mod yaml;
