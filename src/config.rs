use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ListConfig, SectionMap};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub hide_nav: bool,
    #[serde(default)]
    pub vim_mode: bool,
    /// Show navigator titles in upper case
    #[serde(default)]
    pub uppercase_titles: bool,
    /// YAML or JSON file mapping section keys to items
    #[serde(default)]
    pub data: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(config_str: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(config_str)?)
    }
}

/// Load a section map from a data file
///
/// `.json` files are parsed as JSON, anything else as YAML. Key order in the
/// file is the section order.
pub fn load_sections(path: &Path) -> Result<SectionMap<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let sections = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON data file {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML data file {}", path.display()))?
    };
    Ok(sections)
}
