//! Protected-branch set loading from the embedded protected.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct ProtectedConfig {
    protected: ProtectedSection,
}

#[derive(Debug, Deserialize)]
struct ProtectedSection {
    branches: Vec<String>,
}

// Embed the TOML file directly in the binary at compile time
const PROTECTED_TOML: &str = include_str!("../protected.toml");

/// Branch names that are never deletion candidates, regardless of merge
/// status or remote visibility.
pub fn protected_branches() -> Result<HashSet<String>> {
    let config: ProtectedConfig =
        toml::from_str(PROTECTED_TOML).context("Failed to parse protected branches TOML file")?;
    Ok(config.protected.branches.into_iter().collect())
}
