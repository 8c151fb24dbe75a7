//! Dashboard configuration.
//!
//! YAML file with every section optional; missing fields fall back to the
//! built-in layout and gauge presets.

use crate::dashboard::DashboardLayout;
use crate::error::{Error, Result};
use crate::gauge::GaugeConfig;
use crate::widgets::DisplayPalette;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::path::{Path, PathBuf};

/// File name looked up under the user config directory.
pub const CONFIG_FILE: &str = "dashboard.yaml";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Element positions and panel colors.
    #[serde(default)]
    pub layout: DashboardLayout,

    /// Speedometer dial.
    #[serde(default = "GaugeConfig::speedometer")]
    pub speedometer: GaugeConfig,

    /// Tachometer dial.
    #[serde(default = "GaugeConfig::tachometer")]
    pub tachometer: GaugeConfig,

    /// Fuel dial.
    #[serde(default = "GaugeConfig::fuel")]
    pub fuel: GaugeConfig,

    /// Digital read-out colors.
    #[serde(default)]
    pub display: DisplayPalette,
}

fn default_version() -> u32 {
    1
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            layout: DashboardLayout::default(),
            speedometer: GaugeConfig::speedometer(),
            tachometer: GaugeConfig::tachometer(),
            fuel: GaugeConfig::fuel(),
            display: DisplayPalette::default(),
        }
    }
}

impl DashboardConfig {
    /// Creates a configuration with the built-in presets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the line number if parsing fails,
    /// or [`Error::InvalidConfig`] if a gauge does not validate.
    pub fn parse(yaml: &str) -> Result<Self> {
        let overlay: Value = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        // Each section overrides its own preset, not a generic default.
        let mut merged = serde_yaml_ng::to_value(Self::default()).map_err(|e| Error::InvalidConfig {
            key: "<root>".to_string(),
            message: e.to_string(),
        })?;
        if !overlay.is_null() {
            merge(&mut merged, overlay);
        }

        let config: Self = serde_yaml_ng::from_value(merged).map_err(|e| located_error(yaml, &e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::InvalidConfig {
            key: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    /// Checks every gauge and the window size.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.layout.width == 0 || self.layout.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.layout.width,
                height: self.layout.height,
            });
        }
        self.speedometer.validate()?;
        self.tachometer.validate()?;
        self.fuel.validate()
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default config: {e}");
            Self::default()
        })
    }

    /// `<config dir>/dashboard-raster/dashboard.yaml`, if the platform has a
    /// config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dashboard-raster").join(CONFIG_FILE))
    }
}

/// Attach a source line to an error raised while decoding the merged tree.
///
/// Merged values carry no positions, so the raw document is decoded again
/// on its own. When that hits the same failure, its position is the one in
/// the user's file. Otherwise (a partial override tripping a missing field
/// first) the line stays unknown.
fn located_error(yaml: &str, merged_err: &serde_yaml_ng::Error) -> Error {
    let message = merged_err.to_string();
    let line = match serde_yaml_ng::from_str::<DashboardConfig>(yaml) {
        Err(raw) if raw.to_string().contains(&message) => raw.location().map(|l| l.line()),
        _ => None,
    };
    Error::ConfigParse {
        line: line.unwrap_or(0),
        message,
    }
}

/// Recursively overlay `overlay` onto `base`. Mappings merge key by key;
/// anything else, including null, replaces.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
