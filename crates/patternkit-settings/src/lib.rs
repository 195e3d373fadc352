//! PatternKit Settings Crate
//!
//! Loads, validates and saves the editor configuration, and maps it onto
//! the designer's store and controller options.

pub mod config;
pub mod error;

pub use config::{BehaviorSettings, CanvasSettings, Config, EditorSettings, MeasurementSystem};
pub use error::{Result, SettingsError};
