use serde::{Deserialize, Serialize};
use std::{fmt::Display, fs, path::Path};

use crate::ConfigError;

/// Flags selecting which cleaning behaviors are active.
///
/// `extract_text` takes precedence over everything else: when it is set
/// the document goes through the plain-text extractor and the four line
/// cleaning flags are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    pub fix_spacing: bool,
    pub standardize_headers: bool,
    pub fix_lists: bool,
    pub remove_multiple_blanks: bool,
    pub extract_text: bool,
}

impl CleanerConfig {
    /// A configuration with every flag off.
    pub fn none() -> Self {
        CleanerConfig {
            fix_spacing: false,
            standardize_headers: false,
            fix_lists: false,
            remove_multiple_blanks: false,
            extract_text: false,
        }
    }

    /// Load a configuration from a `.json`/`.toml` path, or parse `config`
    /// itself as inline JSON (or TOML) when no such file exists. A source
    /// with neither `{` nor `=` in it can only be a path.
    pub fn from_config(config: &str) -> Result<CleanerConfig, ConfigError> {
        if Path::new(config).exists() {
            let config_content = fs::read_to_string(config)?;
            if config.ends_with(".json") {
                Ok(serde_json::from_str(&config_content)?)
            } else if config.ends_with(".toml") {
                #[cfg(feature = "toml_config")]
                {
                    Ok(toml::from_str(&config_content)?)
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(ConfigError::TomlNotEnabled)
                }
            } else {
                Err(ConfigError::UnsupportedFormat)
            }
        } else if !config.contains(['{', '=']) {
            Err(ConfigError::NotFound(config.to_string()))
        } else {
            Self::parse_inline(config)
        }
    }

    #[cfg(feature = "toml_config")]
    fn parse_inline(config: &str) -> Result<CleanerConfig, ConfigError> {
        match serde_json::from_str(config) {
            Ok(parsed) => Ok(parsed),
            // Object syntax is JSON; report its error instead of TOML's.
            Err(e) if config.trim_start().starts_with('{') => Err(e.into()),
            Err(_) => Ok(toml::from_str(config)?),
        }
    }

    #[cfg(not(feature = "toml_config"))]
    fn parse_inline(config: &str) -> Result<CleanerConfig, ConfigError> {
        serde_json::from_str(config).map_err(ConfigError::from)
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        CleanerConfig {
            fix_spacing: true,
            standardize_headers: true,
            fix_lists: true,
            remove_multiple_blanks: true,
            extract_text: false,
        }
    }
}

impl Display for CleanerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}
