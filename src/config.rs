//! TOML configuration with layered overrides.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, `SWATCHPAD_`
//! environment variables (`SWATCHPAD_SHADOW__BLUR=4`), explicit CLI values.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::parse_hex;
use crate::offset::PadGeometry;
use crate::picker::DEFAULT_COLOR;
use crate::shadow::ShadowSettings;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "swatchpad.toml";

const ENV_PREFIX: &str = "SWATCHPAD_";

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("configuration error: {0}")]
    Extract(#[from] Box<figment::Error>),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid pad geometry: {0}")]
    InvalidGeometry(String),
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Direction pad geometry
    pub pad: PadGeometry,
    /// Initial box-shadow values
    pub shadow: ShadowSettings,
    /// Color picker settings
    pub picker: PickerConfig,
}

/// Color picker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Color used when nothing was persisted yet
    pub initial: String,
    /// Where the last selected color is kept (default under `$HOME/.local/state`)
    pub store_path: Option<PathBuf>,
    /// Disable persistence entirely
    pub persist: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_COLOR.to_string(),
            store_path: None,
            persist: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file (no layering).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(content))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the layered configuration.
    ///
    /// `file` is the explicit `--config` path; without it `swatchpad.toml` in
    /// the working directory is used when present. `overrides` is a partial
    /// TOML-shaped value holding only what the command line set.
    pub fn layered<T: Serialize>(file: Option<&Path>, overrides: &T) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("config file not found: {}", path.display()),
                    )));
                }
                figment = figment.merge(Toml::file(path));
            }
            None => figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(Box::new)?;

        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if parse_hex(&self.picker.initial).is_none() {
            return Err(ConfigError::InvalidColor(self.picker.initial.clone()));
        }
        if self.shadow.color_rgb().is_none() {
            return Err(ConfigError::InvalidColor(self.shadow.color.clone()));
        }
        let pad = &self.pad;
        if !(pad.width > 0.0 && pad.height > 0.0 && pad.handle >= 0.0) {
            return Err(ConfigError::InvalidGeometry(format!(
                "{}x{} with handle {}",
                pad.width, pad.height, pad.handle
            )));
        }
        if pad.max_offset <= 0 {
            return Err(ConfigError::InvalidGeometry(format!(
                "max_offset must be positive, got {}",
                pad.max_offset
            )));
        }
        Ok(())
    }

    /// Shadow settings with every field clamped into range.
    pub fn initial_shadow(&self) -> ShadowSettings {
        self.shadow.clone().normalized(self.pad.max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_initial_color() {
        let result = AppConfig::from_toml("[picker]\ninitial = \"#abc\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn rejects_non_positive_bound() {
        let result = AppConfig::from_toml("[pad]\nmax_offset = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidGeometry(_))));
    }
}
