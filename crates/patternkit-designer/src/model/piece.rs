use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use patternkit_core::constants::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};

use super::{ClosurePolicy, ClosurePurpose, PieceKind, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

impl Default for PieceStyle {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainlineKind {
    Straight,
    Cross,
    Bias,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grainline {
    pub kind: GrainlineKind,
    pub angle_degrees: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeamKind {
    Normal,
    Felled,
}

/// Seam allowance applied to a piece. `points` of the piece hold the
/// offset outline; the outline it was computed from is kept here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeamAllowance {
    pub width_units: f64,
    pub kind: SeamKind,
    #[serde(default)]
    pub original_outline: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPiece {
    pub id: String,
    pub kind: PieceKind,
    pub points: Vec<Point>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub style: PieceStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grainline: Option<Grainline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seam: Option<SeamAllowance>,
}

impl PatternPiece {
    pub fn new(id: impl Into<String>, kind: PieceKind, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            kind,
            points,
            selected: false,
            style: PieceStyle::default(),
            grainline: None,
            seam: None,
        }
    }

    pub fn with_style(mut self, style: PieceStyle) -> Self {
        self.style = style;
        self
    }

    /// Consecutive point pairs of the outline. The wrap segment is included
    /// when the kind is closed for `purpose`.
    pub fn segments(&self, purpose: ClosurePurpose) -> Vec<(Point, Point)> {
        self.segments_with(&ClosurePolicy::default(), purpose)
    }

    pub fn segments_with(
        &self,
        policy: &ClosurePolicy,
        purpose: ClosurePurpose,
    ) -> Vec<(Point, Point)> {
        segment_pairs(&self.points, policy.is_closed(self.kind, purpose))
    }

    /// Builds the outline as a lyon path, closed per the render policy.
    pub fn render_path(&self) -> Path {
        let mut builder = Path::builder();
        if let Some((first, rest)) = self.points.split_first() {
            builder.begin(point(first.x as f32, first.y as f32));
            for p in rest {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(self.kind.is_closed_for(ClosurePurpose::Render));
        }
        builder.build()
    }

    /// Axis aligned bounds `(min_x, min_y, max_x, max_y)`, `None` for a piece without points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let path = self.render_path();
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        Some((
            bb.min.x as f64,
            bb.min.y as f64,
            bb.max.x as f64,
            bb.max.y as f64,
        ))
    }
}

/// Pairs `(points[i], points[i + 1])`, plus `(last, first)` when `cyclic`.
pub fn segment_pairs(points: &[Point], cyclic: bool) -> Vec<(Point, Point)> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }
    let count = if cyclic { n } else { n.saturating_sub(1) };
    (0..count)
        .map(|i| (points[i], points[(i + 1) % n]))
        .collect()
}
