//! Editor configuration for PatternKit
//!
//! Configuration is organized into logical sections:
//! - Editor defaults (hit tolerance, stroke, grain angle, units)
//! - Canvas (surface size, fabric width, grid, initial zoom)
//! - Behavior (selection policy, cut wrap rule)
//!
//! Files are JSON or TOML, chosen by extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use patternkit_core::units::MeasurementSystem;
use patternkit_core::constants::{
    DEFAULT_FABRIC_WIDTH, DEFAULT_GRID_SPACING, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
    HIT_TEST_TOLERANCE, MAX_ZOOM, MIN_GRID_SPACING, MIN_ZOOM,
};
use patternkit_designer::{
    ClosurePolicy, ControllerSettings, GridSettings, PatternState, PieceStyle, SelectionPolicy,
    StoreOptions, Viewport,
};

use crate::error::{Result, SettingsError};

const CONFIG_DIR_NAME: &str = "patternkit";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Defaults applied to newly drawn pieces and pointer handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_hit_tolerance")]
    pub hit_test_tolerance: f64,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Angle the grain tool applies, in degrees.
    #[serde(default = "default_grain_angle")]
    pub grain_angle_degrees: f64,
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
}

fn default_hit_tolerance() -> f64 {
    HIT_TEST_TOLERANCE
}

fn default_stroke_color() -> String {
    DEFAULT_STROKE_COLOR.to_string()
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_grain_angle() -> f64 {
    90.0
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            hit_test_tolerance: default_hit_tolerance(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            grain_angle_degrees: default_grain_angle(),
            measurement_system: MeasurementSystem::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub fabric_width: f64,
    pub grid_spacing: f64,
    pub grid_visible: bool,
    pub zoom: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            viewport_width: 1200.0,
            viewport_height: 800.0,
            fabric_width: DEFAULT_FABRIC_WIDTH,
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_visible: true,
            zoom: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    pub selection_policy: SelectionPolicy,
    /// Whether cutting a line or curve also scans its last-to-first segment.
    pub wrap_open_pieces_on_cut: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::Multiset,
            wrap_open_pieces_on_cut: true,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub behavior: BehaviorSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/patternkit/config.toml`.
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |key: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::invalid(key, format!("must be > 0, got {}", value)))
            }
        };

        positive("editor.hit_test_tolerance", self.editor.hit_test_tolerance)?;
        positive("editor.stroke_width", self.editor.stroke_width)?;
        if !self.editor.grain_angle_degrees.is_finite() {
            return Err(SettingsError::invalid(
                "editor.grain_angle_degrees",
                "must be a finite number",
            ));
        }
        if self.editor.stroke_color.trim().is_empty() {
            return Err(SettingsError::invalid("editor.stroke_color", "must not be empty"));
        }

        positive("canvas.viewport_width", self.canvas.viewport_width)?;
        positive("canvas.viewport_height", self.canvas.viewport_height)?;
        positive("canvas.fabric_width", self.canvas.fabric_width)?;
        let spacing = self.canvas.grid_spacing;
        if !(spacing.is_finite() && spacing >= MIN_GRID_SPACING) {
            return Err(SettingsError::invalid(
                "canvas.grid_spacing",
                format!("must be >= {}, got {}", MIN_GRID_SPACING, spacing),
            ));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.canvas.zoom) {
            return Err(SettingsError::invalid(
                "canvas.zoom",
                format!("must be within {}..={}", MIN_ZOOM, MAX_ZOOM),
            ));
        }

        Ok(())
    }

    pub fn piece_style(&self) -> PieceStyle {
        PieceStyle {
            stroke_color: self.editor.stroke_color.clone(),
            stroke_width: self.editor.stroke_width,
            fill_color: None,
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            selection: self.behavior.selection_policy,
            closure: ClosurePolicy {
                wrap_open_on_cut: self.behavior.wrap_open_pieces_on_cut,
            },
            default_style: self.piece_style(),
        }
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            hit_test_tolerance: self.editor.hit_test_tolerance,
            default_style: self.piece_style(),
            grain_angle_degrees: self.editor.grain_angle_degrees,
        }
    }

    /// Empty pattern carrying the configured fabric, grid and zoom.
    pub fn initial_state(&self) -> PatternState {
        PatternState {
            zoom_factor: self.canvas.zoom,
            fabric_width_units: self.canvas.fabric_width,
            grid: GridSettings {
                spacing_units: self.canvas.grid_spacing,
                visible: self.canvas.grid_visible,
            },
            ..PatternState::default()
        }
    }

    pub fn viewport(&self) -> Viewport {
        let mut viewport = Viewport::new(self.canvas.viewport_width, self.canvas.viewport_height);
        viewport.set_zoom(self.canvas.zoom);
        viewport
    }
}
