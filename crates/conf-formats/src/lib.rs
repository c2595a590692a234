//! Format front ends.
//!
//! Parses YAML, JSON, or TOML text into the abstract
//! [`Configuration`](conf_core::Configuration) tree consumed by the loader.
//! The loader itself never sees source text; everything downstream of this
//! crate is format-agnostic.

pub mod error;
pub mod format;

mod formats;

use formats::{json, toml, yaml};

use std::fs;
use std::path::Path;

use conf_core::Configuration;

pub use error::{FormatError, Result};
pub use format::Format;

/// Parse `source` as `format` into a configuration with an optional display
/// name.
pub fn from_str(source: &str, format: Format, name: Option<&str>) -> Result<Configuration> {
    let root = match format {
        Format::Yaml => yaml::parse(source)?,
        Format::Json => json::parse(source)?,
        Format::Toml => toml::parse(source)?,
    };
    Ok(match name {
        Some(name) => Configuration::named(root, name),
        None => Configuration::new(root),
    })
}

/// Read and parse a configuration file.
///
/// The format is detected from the file extension and the display name is the
/// file stem.
pub fn from_path(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let format = Format::from_extension(extension)
        .ok_or_else(|| FormatError::UnsupportedFormat(extension.to_string()))?;
    let name = path.file_stem().and_then(|stem| stem.to_str());

    let source = fs::read_to_string(path)?;
    tracing::debug!(?path, %format, "loading configuration file");
    from_str(&source, format, name)
}
