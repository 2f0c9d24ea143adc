//! Configuration for the template generator
//!
//! This module provides configuration loading from YAML files with
//! environment variable substitution support. The defaults carry the
//! canonical constants of the published RDLS template (sheet order, tab
//! colours, worksheet naming parameters) so that a plain run reproduces
//! it exactly.

use indexmap::IndexMap;
use rdls_core::{RdlsError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Excel worksheet names are limited to 31 characters.
pub const MAX_SHEET_NAME_LENGTH: usize = 31;

/// Template generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Name of the worksheet holding root-level fields
    pub main_sheet_name: String,
    /// Property name used as the linking identifier between sheets
    pub root_id: String,
    /// Length intermediate path segments are truncated to in sheet names
    pub truncation_length: usize,
    /// Maximum nesting depth (path segments) before the walk aborts
    pub max_depth: usize,
    /// Number of blank data-entry rows per worksheet
    pub input_rows: u32,
    /// Component names selectable with `--component`
    pub components: Vec<String>,
    /// Canonical worksheet order; discovered sheets not listed here are
    /// appended after it
    pub sheet_order: Vec<String>,
    /// Tab colour per top-level path segment, `#rrggbb`
    pub tab_colors: IndexMap<String, String>,
    /// Tab colour for sheets without a palette entry
    pub default_tab_color: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            main_sheet_name: "datasets".to_string(),
            root_id: "id".to_string(),
            truncation_length: 10,
            max_depth: 32,
            input_rows: 1000,
            components: vec![
                "hazard".to_string(),
                "exposure".to_string(),
                "vulnerability".to_string(),
                "loss".to_string(),
            ],
            sheet_order: [
                "datasets",
                "attributions",
                "sources",
                "referenced_by",
                "spatial_gazetteerEntries",
                "resources",
                "hazard_event_sets",
                "hazard_event_sets_hazards",
                "hazard_event_sets_spatial_gazet",
                "hazard_event_sets_events",
                "hazard_event_sets_events_footpr",
                "exposure_cost",
                "vulnerabil_cost",
                "vulnerabil_spatial_gazetteerEnt",
                "loss_cost",
                "links",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            tab_colors: IndexMap::from([
                ("resources".to_string(), "#0b3860".to_string()),
                ("hazard".to_string(), "#1a6eff".to_string()),
                ("exposure".to_string(), "#989bff".to_string()),
                ("vulnerability".to_string(), "#f9d6ff".to_string()),
                ("loss".to_string(), "#c57082".to_string()),
            ]),
            default_tab_color: "#efefef".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Check configured values for ranges the generator cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `RdlsError::ConfigError` naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.main_sheet_name.is_empty() || self.main_sheet_name.len() > MAX_SHEET_NAME_LENGTH {
            return Err(RdlsError::config(format!(
                "main_sheet_name must be 1..={MAX_SHEET_NAME_LENGTH} characters, got '{}'",
                self.main_sheet_name
            )));
        }
        if self.root_id.is_empty() {
            return Err(RdlsError::config("root_id must not be empty"));
        }
        if self.truncation_length == 0 || self.truncation_length > MAX_SHEET_NAME_LENGTH {
            return Err(RdlsError::config(format!(
                "truncation_length must be 1..={MAX_SHEET_NAME_LENGTH}, got {}",
                self.truncation_length
            )));
        }
        if self.max_depth == 0 {
            return Err(RdlsError::config("max_depth must be at least 1"));
        }
        if self.input_rows == 0 {
            return Err(RdlsError::config("input_rows must be at least 1"));
        }
        for (segment, color) in &self.tab_colors {
            parse_color(color).map_err(|e| {
                RdlsError::config(format!("tab_colors entry '{segment}': {e}"))
            })?;
        }
        parse_color(&self.default_tab_color)
            .map_err(|e| RdlsError::config(format!("default_tab_color: {e}")))?;
        Ok(())
    }
}

/// Load configuration from a YAML file with environment variable substitution
///
/// # Errors
///
/// Returns `RdlsError::IoError` if the file cannot be read
/// Returns `RdlsError::ConfigError` if the YAML cannot be parsed or fails
/// validation
pub fn load_config(path: &Path) -> Result<TemplateConfig> {
    let contents = std::fs::read_to_string(path).map_err(RdlsError::IoError)?;

    let substituted = substitute_env_vars(&contents);

    let config: TemplateConfig = serde_yaml::from_str(&substituted)
        .map_err(|e| RdlsError::ConfigError(format!("Failed to parse YAML config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Substitute environment variables in the format `${VAR:-default}`
fn substitute_env_vars(content: &str) -> String {
    // Hardcoded pattern, known valid; fall back to the raw content if the
    // regex engine ever rejects it.
    let Ok(re) = regex::Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}") else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        env::var(var_name).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}

/// Parse a `#rrggbb` colour into its RGB value.
///
/// # Errors
///
/// Returns `RdlsError::ConfigError` for anything but six hex digits
/// behind a `#`.
pub fn parse_color(color: &str) -> Result<u32> {
    let digits = color.strip_prefix('#').ok_or_else(|| {
        RdlsError::config(format!("colour '{color}' must start with '#'"))
    })?;
    if digits.len() != 6 {
        return Err(RdlsError::config(format!(
            "colour '{color}' must have exactly six hex digits"
        )));
    }
    u32::from_str_radix(digits, 16)
        .map_err(|_| RdlsError::config(format!("colour '{color}' is not valid hex")))
}
