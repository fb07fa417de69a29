//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/famtree/famtree.toml`
//! 3. Environment variables: `FAMTREE_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{ValidationPolicy, DEFAULT_DATE_FORMAT};

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub strict: Option<bool>,
    pub date_format: Option<String>,
}

/// Unified configuration for famtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Validate gender and birth date of every person (default: false)
    pub strict: bool,
    /// chrono format used to validate birth dates in strict mode
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Get the XDG config directory for famtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "famtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("famtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base). Overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            strict: overlay.strict.unwrap_or(self.strict),
            date_format: overlay
                .date_format
                .clone()
                .unwrap_or_else(|| self.date_format.clone()),
        }
    }

    /// Load settings with layered precedence from the XDG location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `global_path` as the global config file.
    ///
    /// A missing file is skipped; an unreadable or malformed one is an error.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current, Environment::with_prefix("FAMTREE"))
    }

    /// Apply FAMTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env.try_parsing(true))
            .build()
            .map_err(config_err)?;

        // NotFound means the variable is unset; anything else is a bad value.
        match config.get_bool("strict") {
            Ok(val) => settings.strict = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_string("date_format") {
            Ok(val) => settings.date_format = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Validation policy for the tree builder.
    pub fn validation_policy(&self) -> ValidationPolicy {
        if self.strict {
            ValidationPolicy::Strict {
                date_format: self.date_format.clone(),
            }
        } else {
            ValidationPolicy::Lenient
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# famtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/famtree/famtree.toml
#   Env:    FAMTREE_* environment variables (explicit overrides)
#   Flag:   --strict

# Reject gender codes other than M/F and unparseable birth dates
# strict = false

# chrono format for birth dates in strict mode
# date_format = "%Y-%m-%d"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
