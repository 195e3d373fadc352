//! Named constants used across the editor.
//!
//! All lengths are in pattern units (millimetres unless the active
//! measurement system says otherwise).

/// Distance under which a pointer counts as touching a piece outline.
pub const HIT_TEST_TOLERANCE: f64 = 5.0;

/// Half of the drawn grainline length, measured from the piece centroid.
pub const GRAINLINE_HALF_LENGTH: f64 = 50.0;

/// Default fabric width (bolt width) in pattern units.
pub const DEFAULT_FABRIC_WIDTH: f64 = 1500.0;

/// Default grid spacing in pattern units.
pub const DEFAULT_GRID_SPACING: f64 = 10.0;

/// Smallest grid spacing a config may request.
pub const MIN_GRID_SPACING: f64 = 0.1;

/// Grids needing more lines than this per axis are not drawn.
pub const MAX_GRID_LINES: usize = 2000;

/// Default stroke color for newly drawn pieces.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Default stroke width for newly drawn pieces.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Seam allowance widths offered by the toolbar.
pub const SEAM_ALLOWANCE_PRESETS: [f64; 5] = [5.0, 10.0, 15.0, 20.0, 40.0];

/// Zoom limits accepted by the view.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 50.0;

/// Zoom step used by zoom in/out.
pub const ZOOM_STEP: f64 = 1.2;

/// Fraction of the surface left free on each side when fitting the pattern.
pub const VIEW_PADDING: f64 = 0.05;
