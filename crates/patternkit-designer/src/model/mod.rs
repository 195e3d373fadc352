//! Pattern model: points, piece kinds and pattern pieces.

use serde::{Deserialize, Serialize};

mod piece;

pub use piece::{
    segment_pairs, Grainline, GrainlineKind, PatternPiece, PieceStyle, SeamAllowance, SeamKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// What an outline is being interpreted for when deciding whether the
/// last point connects back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosurePurpose {
    /// Scanning segments for the nearest cut position.
    Cut,
    /// Painting the outline.
    Render,
}

/// Decides per kind and purpose whether an outline is cyclic.
///
/// Rendering only closes rectangles and circles. Cut scanning closes them
/// too, and also wraps lines and curves while `wrap_open_on_cut` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosurePolicy {
    pub wrap_open_on_cut: bool,
}

impl Default for ClosurePolicy {
    fn default() -> Self {
        Self {
            wrap_open_on_cut: true,
        }
    }
}

impl ClosurePolicy {
    pub fn is_closed(&self, kind: PieceKind, purpose: ClosurePurpose) -> bool {
        match purpose {
            ClosurePurpose::Cut => kind.is_closed_outline() || self.wrap_open_on_cut,
            ClosurePurpose::Render => kind.is_closed_outline(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Line,
    Curve,
    Rectangle,
    Circle,
}

impl PieceKind {
    /// Whether the kind describes a closed outline in its own right.
    pub fn is_closed_outline(&self) -> bool {
        matches!(self, PieceKind::Rectangle | PieceKind::Circle)
    }

    /// Whether the wrap segment (last point back to first) exists for
    /// `purpose` under the default [`ClosurePolicy`].
    pub fn is_closed_for(&self, purpose: ClosurePurpose) -> bool {
        ClosurePolicy::default().is_closed(*self, purpose)
    }

    /// Prefix used when generating piece ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            PieceKind::Line => "line",
            PieceKind::Curve => "curve",
            PieceKind::Rectangle => "rectangle",
            PieceKind::Circle => "circle",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id_prefix())
    }
}
