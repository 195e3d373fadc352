//! # PatternKit
//!
//! A Rust-based 2D sewing pattern drafting editor with support for:
//! - Line, curve and rectangle pattern pieces
//! - Grainlines and seam allowances
//! - Cutting pieces at the nearest outline segment
//!
//! ## Architecture
//!
//! PatternKit is organized as a workspace with multiple crates:
//!
//! 1. **patternkit-core** - Error taxonomy, editor constants, measurement units
//! 2. **patternkit-designer** - Geometry kernel, pattern store, interaction controller, rendering
//! 3. **patternkit-settings** - Editor configuration (JSON/TOML)
//! 4. **patternkit** - Headless driver that replays pointer-event scripts

pub mod session;

pub use patternkit_designer as designer;
pub use patternkit_settings as settings;

pub use patternkit_core::{MeasurementSystem, PatternError, Result};
pub use patternkit_designer::{
    ControllerOutcome, EventContext, InteractionController, PatternPiece, PatternState,
    PatternStore, PieceKind, Point, PointerEvent, ToolId, ViewTransform, Viewport,
};
pub use patternkit_settings::{Config, SettingsError};
pub use session::{Script, ScriptStep, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for state dumps
/// - RUST_LOG environment variable support (INFO by default)
/// - Optional JSON lines when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
