use egui::{Color32, Visuals};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CanvasError, CanvasResult};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "FREEHAND_CANVAS_CONFIG";

pub const DEFAULT_STROKE_THICKNESS: f32 = 1.25;
pub const DEFAULT_INPUT_RATE_HZ: f32 = 30.0;

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub dark_mode: bool,
    pub background: Color32,
    pub stroke: Color32,
    /// Stroke bounds in the debug overlay
    pub bounds: Color32,
    pub text: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            dark_mode: false,
            background: Color32::from_rgb(245, 245, 245),
            stroke: Color32::BLACK,
            bounds: Color32::LIGHT_GRAY,
            text: Color32::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            background: Color32::from_rgb(24, 24, 24),
            stroke: Color32::from_rgb(230, 230, 230),
            bounds: Color32::DARK_GRAY,
            text: Color32::WHITE,
        }
    }

    pub fn visuals(&self) -> Visuals {
        if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        }
    }
}

/// Settings for the canvas and its renderer.
///
/// Every field has a default, so a config file only needs the values it changes:
///
/// ```json
/// { "stroke_thickness": 2.0, "theme": { "dark_mode": true } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub stroke_thickness: f32,
    /// Pointer samples per second while drawing
    pub input_rate_hz: f32,
    pub debug_overlay: bool,
    pub theme: Theme,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stroke_thickness: DEFAULT_STROKE_THICKNESS,
            input_rate_hz: DEFAULT_INPUT_RATE_HZ,
            debug_overlay: false,
            theme: Theme::default(),
        }
    }
}

impl CanvasConfig {
    /// Seconds between pointer samples. Falls back to the default rate for non-positive values.
    pub fn input_period(&self) -> f32 {
        if self.input_rate_hz > 0.0 {
            1.0 / self.input_rate_hz
        } else {
            1.0 / DEFAULT_INPUT_RATE_HZ
        }
    }

    pub fn from_json(json: &str) -> CanvasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> CanvasResult<Self> {
        debug!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| CanvasError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or defaults when it is unset.
    pub fn from_env() -> CanvasResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
