//! # PatternKit Designer
//!
//! Drafting engine for sewing pattern pieces. It owns an in-memory pattern
//! (pieces, selection, zoom, history), exposes the drafting operations
//! (draw, select, cut, grainline and seam allowance) and translates pointer
//! gestures into those operations.
//!
//! ## Architecture
//!
//! ```text
//! InteractionController (pointer events + EventContext)
//!   └── PatternStore (single writer of PatternState)
//!         ├── geometry (pure kernel: distances, hit tests, offsets)
//!         └── HistoryLog (append-only)
//!
//! render_pattern (read-only walk)
//!   └── RenderSink (PixmapSink paints with tiny-skia)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patternkit_designer::{EventContext, InteractionController, PatternStore, PointerEvent, ToolId};
//!
//! let mut store = PatternStore::new();
//! let mut controller = InteractionController::default();
//! let ctx = EventContext::new(ToolId::Rectangle, (800.0, 600.0));
//!
//! controller.handle(&mut store, PointerEvent::Down { x: 10.0, y: 10.0 }, &ctx);
//! controller.handle(&mut store, PointerEvent::Move { x: 60.0, y: 40.0 }, &ctx);
//! controller.handle(&mut store, PointerEvent::Up { x: 60.0, y: 40.0 }, &ctx);
//! assert_eq!(store.pieces().len(), 1);
//! ```

pub mod controller;
pub mod geometry;
pub mod history;
pub mod model;
pub mod render;
pub mod renderer;
pub mod state;
pub mod store;
pub mod tools;
pub mod viewport;

pub use controller::{
    ControllerOutcome, ControllerSettings, DrawingSession, EventContext, InteractionController,
    PointerEvent,
};
pub use geometry::{
    distance_point_to_segment, grainline_segment, is_point_near_piece, offset_polygon_for_seam,
};
pub use history::{ActionKind, HistoryLog, PatternAction, PieceChange};
pub use model::{
    ClosurePolicy, ClosurePurpose, Grainline, GrainlineKind, PatternPiece, PieceKind, PieceStyle,
    Point, SeamAllowance, SeamKind,
};
pub use render::{render_pattern, Overlay, RenderSink, StrokeStyle};
pub use renderer::{render_to_image, PixmapSink};
pub use state::{GridSettings, PatternState};
pub use store::{PatternStore, SelectionPolicy, StoreOptions};
pub use tools::{tool_catalog, ToolEntry, ToolGroup, ToolId};
pub use viewport::{ViewTransform, Viewport};

pub use patternkit_core::{PatternError, Result};
