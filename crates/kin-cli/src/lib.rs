//! Kinship command line support
//!
//! File loading, family replay and the stress harness behind the `kinship`
//! binary.

#![warn(missing_docs)]

pub mod family;
pub mod stress;

use anyhow::Context;
use kin_graph::GraphConfig;
use kin_layout::LayoutConfig;
use std::path::Path;

// Re-exports
pub use family::{Family, FamilyFile, RelationEntry, ReplayError};
pub use stress::{count_overlaps, run_stress, StressReport};

/// Read a family file and replay it into a graph
///
/// # Errors
/// Fails if the file cannot be read, is not valid JSON, or names a person
/// index that does not exist.
pub fn load_family(path: &Path) -> anyhow::Result<Family> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read family file {}", path.display()))?;
    let file: FamilyFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse family file {}", path.display()))?;
    let family = file
        .replay(GraphConfig::default())
        .with_context(|| format!("failed to replay family file {}", path.display()))?;
    Ok(family)
}

/// Read layout geometry from TOML, or use defaults when no path is given
///
/// # Errors
/// Fails if the file cannot be read or is not valid TOML.
pub fn load_layout_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout config {}", path.display()))?;
    parse_layout_config(&text)
        .with_context(|| format!("failed to parse layout config {}", path.display()))
}

/// Parse layout geometry from TOML text; missing keys keep their defaults
///
/// # Errors
/// Fails if `text` is not valid TOML for [`LayoutConfig`].
pub fn parse_layout_config(text: &str) -> anyhow::Result<LayoutConfig> {
    Ok(toml::from_str(text)?)
}
