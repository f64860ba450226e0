//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nestset/nestset.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `NESTSET_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{Node, SortOrder};

/// Deepest level the roots may start at when rebuilding with a custom order.
pub const MAX_START_LEVEL: u16 = 256;

/// Unified configuration for nestset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Indentation marker, repeated once per level (default: "-")
    pub marker: String,
    /// Text between indentation and name (default: " ")
    pub separator: String,
    /// Sibling order (default: natural)
    pub order: SortOrder,
    /// Level of the roots when rebuilding with a custom order
    pub start_level: usize,
    /// Tree file used when none is given on the command line
    pub tree_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: "-".into(),
            separator: " ".into(),
            order: SortOrder::Natural,
            start_level: 0,
            tree_file: None,
        }
    }
}

/// Raw settings for intermediate parsing (None → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub marker: Option<String>,
    pub separator: Option<String>,
    pub order: Option<SortOrder>,
    pub start_level: Option<usize>,
    pub tree_file: Option<PathBuf>,
}

/// Get the XDG config directory for nestset.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nestset").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nestset.toml"))
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

/// Expand `~`, `$VAR` and `${VAR}` in a path, leaving it untouched on failure.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Label for a node at a level: `marker * level + separator + name`.
    pub fn label(&self, node: &Node, level: usize) -> String {
        format!("{}{}{}", self.marker.repeat(level), self.separator, node.name)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            marker: overlay.marker.clone().unwrap_or_else(|| self.marker.clone()),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            order: overlay.order.unwrap_or(self.order),
            start_level: overlay.start_level.unwrap_or(self.start_level),
            tree_file: overlay.tree_file.clone().or_else(|| self.tree_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional explicit config file; it must exist when given
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        current = current.merge_local(local)?;
        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        current.expand_paths();
        Ok(current)
    }

    /// Load defaults plus an optional local file, ignoring global config and env vars.
    pub fn load_local_only(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default().merge_local(local)?;
        current.validate()?;
        current.expand_paths();
        Ok(current)
    }

    fn merge_local(self, local: Option<&Path>) -> Result<Self, ApplicationError> {
        match local {
            Some(path) => {
                debug!("load: local config {}", path.display());
                Ok(self.merge_with(&load_raw_settings(path)?))
            }
            None => Ok(self),
        }
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.start_level > usize::from(MAX_START_LEVEL) {
            return Err(ApplicationError::Config {
                message: format!(
                    "start_level {} exceeds maximum {}",
                    self.start_level, MAX_START_LEVEL
                ),
            });
        }
        Ok(())
    }

    fn expand_paths(&mut self) {
        if let Some(path) = &self.tree_file {
            self.tree_file = Some(expand_path(path));
        }
    }

    /// Apply NESTSET_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NESTSET")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("marker") {
            settings.marker = val;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }
        if let Ok(val) = config.get_string("order") {
            settings.order = <SortOrder as clap::ValueEnum>::from_str(&val, true)
                .map_err(|e| ApplicationError::Config {
                    message: format!("NESTSET_ORDER: {}", e),
                })?;
        }
        if let Ok(val) = config.get_int("start_level") {
            settings.start_level = usize::try_from(val).map_err(|e| ApplicationError::Config {
                message: format!("NESTSET_START_LEVEL: {}", e),
            })?;
        }
        if let Ok(val) = config.get_string("tree_file") {
            settings.tree_file = Some(PathBuf::from(val));
        }
        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
