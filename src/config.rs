use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{DEFAULT_PALETTE, HexColor};
use crate::tools::Tool;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// File looked up in the working directory by the native app
pub const CONFIG_FILE_NAME: &str = "whiteboard.json";

/// Static settings for the whiteboard. Nothing here changes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct WhiteboardConfig {
    /// Fill used on layout and clear
    pub background: HexColor,
    pub palette: Vec<HexColor>,
    pub default_tool: Tool,
    pub default_color: HexColor,
    pub default_width: u32,
    /// Bounds of the size slider. Drawing does not re-check them.
    pub min_width: u32,
    pub max_width: u32,
    pub export_file_name: String,
    /// Vertical space around the canvas that is subtracted on layout
    pub canvas_margin: f32,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            background: HexColor::WHITE,
            palette: DEFAULT_PALETTE.to_vec(),
            default_tool: Tool::Brush,
            default_color: HexColor::BLACK,
            default_width: 5,
            min_width: 1,
            max_width: 50,
            export_file_name: "whiteboard-drawing.png".to_owned(),
            canvas_margin: 32.0,
        }
    }
}

impl WhiteboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Settings from `path` when it exists, the defaults otherwise.
    /// A broken file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(err) => {
                log::error!("Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width == 0 || self.min_width > self.max_width {
            return Err(ConfigError::Invalid(format!(
                "width bounds {}..={} are empty or start at zero",
                self.min_width, self.max_width
            )));
        }
        if !(self.min_width..=self.max_width).contains(&self.default_width) {
            return Err(ConfigError::Invalid(format!(
                "default width {} is outside {}..={}",
                self.default_width, self.min_width, self.max_width
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export file name is empty".to_owned()));
        }
        if !self.canvas_margin.is_finite() || self.canvas_margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "canvas margin {} must be a non-negative number",
                self.canvas_margin
            )));
        }
        Ok(())
    }
}
