//! Render sink contract and the walk that feeds it.
//!
//! The engine never paints. [`render_pattern`] reads the pattern state and
//! hands point sequences plus style attributes to a [`RenderSink`] in
//! paint order: grid, pieces (with grainlines and selection markers), then
//! the in-progress drawing and the cursor marker.

use patternkit_core::constants::MAX_GRID_LINES;

use crate::controller::InteractionController;
use crate::geometry::grainline_segment;
use crate::model::{ClosurePurpose, PieceKind, Point};
use crate::state::PatternState;
use crate::tools::ToolId;

const GRID_COLOR: &str = "#eeeeee";
const GRID_STROKE_WIDTH: f64 = 0.5;
const GRAINLINE_COLOR: &str = "#000000";
const GRAINLINE_DASH: (f64, f64) = (5.0, 5.0);
const SELECTION_MARKER_COLOR: &str = "#00ff00";
const SELECTION_MARKER_RADIUS: f64 = 4.0;
const CUT_CURSOR_COLOR: &str = "#ff0000";
const SELECT_CURSOR_COLOR: &str = "#00ff00";
const CURSOR_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub fill: Option<String>,
    /// Dash and gap length, solid when `None`.
    pub dash: Option<(f64, f64)>,
}

impl StrokeStyle {
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            fill: None,
            dash: None,
        }
    }
}

/// Output surface for pattern drawing. Coordinates are model space.
pub trait RenderSink {
    /// Draws a polyline. `smooth` asks for a curve through the points.
    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle, closed: bool, smooth: bool);

    /// Draws a filled dot.
    fn draw_marker(&mut self, center: Point, radius: f64, color: &str);
}

/// Transient interaction state drawn above the pattern.
#[derive(Debug, Clone, Default)]
pub struct Overlay<'a> {
    pub drawing: Option<(PieceKind, &'a [Point])>,
    pub cursor: Option<Point>,
    pub tool: Option<&'a ToolId>,
}

impl<'a> Overlay<'a> {
    pub fn from_controller(controller: &'a InteractionController, tool: &'a ToolId) -> Self {
        Self {
            drawing: controller
                .drawing()
                .map(|session| (session.kind, session.points.as_slice())),
            cursor: controller.cursor(),
            tool: Some(tool),
        }
    }
}

/// Walks `state` into `sink`. `area` is the model space extent covered by
/// the grid (width, height from the origin).
pub fn render_pattern(
    state: &PatternState,
    overlay: &Overlay<'_>,
    area: (f64, f64),
    sink: &mut dyn RenderSink,
) {
    if state.grid.visible && state.grid.spacing_units > 0.0 {
        render_grid(state.grid.spacing_units, area, sink);
    }

    for piece in &state.pieces {
        let style = StrokeStyle {
            color: piece.style.stroke_color.clone(),
            width: piece.style.stroke_width,
            fill: piece.style.fill_color.clone(),
            dash: None,
        };
        sink.draw_polyline(
            &piece.points,
            &style,
            piece.kind.is_closed_for(ClosurePurpose::Render),
            piece.kind == PieceKind::Curve,
        );

        if let Some((start, end)) = grainline_segment(piece) {
            let style = StrokeStyle {
                dash: Some(GRAINLINE_DASH),
                ..StrokeStyle::solid(GRAINLINE_COLOR, 1.0)
            };
            sink.draw_polyline(&[start, end], &style, false, false);
        }

        if piece.selected {
            if let Some(first) = piece.points.first() {
                sink.draw_marker(*first, SELECTION_MARKER_RADIUS, SELECTION_MARKER_COLOR);
            }
        }
    }

    if let Some((kind, points)) = overlay.drawing {
        let style = StrokeStyle::solid("#000000", 2.0);
        sink.draw_polyline(points, &style, false, kind == PieceKind::Curve);
    }

    if let (Some(cursor), Some(tool)) = (overlay.cursor, overlay.tool) {
        match tool {
            ToolId::Cut => sink.draw_marker(cursor, CURSOR_RADIUS, CUT_CURSOR_COLOR),
            ToolId::Select => sink.draw_marker(cursor, CURSOR_RADIUS, SELECT_CURSOR_COLOR),
            _ => {}
        }
    }
}

fn render_grid(spacing: f64, (width, height): (f64, f64), sink: &mut dyn RenderSink) {
    let lines = (width.max(height) / spacing).ceil();
    if !lines.is_finite() || lines > MAX_GRID_LINES as f64 {
        tracing::debug!(spacing, "grid too dense, skipped");
        return;
    }
    let style = StrokeStyle::solid(GRID_COLOR, GRID_STROKE_WIDTH);
    let mut x = 0.0;
    while x < width {
        sink.draw_polyline(&[Point::new(x, 0.0), Point::new(x, height)], &style, false, false);
        x += spacing;
    }
    let mut y = 0.0;
    while y < height {
        sink.draw_polyline(&[Point::new(0.0, y), Point::new(width, y)], &style, false, false);
        y += spacing;
    }
}
