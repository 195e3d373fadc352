//! Geometry kernel for pattern pieces.
//!
//! Pure functions: segment distance, hit testing, seam allowance offset and
//! grainline placement. Degenerate input (zero length edges, empty outlines)
//! is absorbed here and never reported as an error.

use patternkit_core::constants::GRAINLINE_HALF_LENGTH;

use crate::model::{segment_pairs, ClosurePurpose, PatternPiece, Point};

/// Edges shorter than this contribute no normal to the seam offset.
const DEGENERATE_LENGTH: f64 = 1e-12;

/// Euclidean distance from `p` to the closest point of segment `[a, b]`.
///
/// The projection is clamped to the segment. A zero length segment falls
/// back to the distance between `p` and `a`.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance_to(&a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance_to(&proj)
}

/// True when `p` lies strictly closer than `threshold` to the outline of `piece`.
///
/// Hit testing follows the painted outline: lines and curves never wrap,
/// rectangles and circles include their closing edge. Pieces with fewer
/// than two points never match.
pub fn is_point_near_piece(p: Point, piece: &PatternPiece, threshold: f64) -> bool {
    if piece.points.len() < 2 {
        return false;
    }
    piece
        .segments(ClosurePurpose::Render)
        .into_iter()
        .any(|(a, b)| distance_point_to_segment(p, a, b) < threshold)
}

/// Index of the segment nearest to `p`, scanning consecutive pairs and the
/// wrap pair when `cyclic`. Ties keep the earliest index.
pub fn nearest_segment_index(points: &[Point], p: Point, cyclic: bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (a, b)) in segment_pairs(points, cyclic).into_iter().enumerate() {
        let d = distance_point_to_segment(p, a, b);
        match best {
            Some((_, min)) if d >= min => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Arithmetic mean of the points, `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Some(Point::new(sx / n, sy / n))
}

/// Shoelace signed area. Positive for counter-clockwise outlines in a
/// y-up frame.
pub fn signed_area(points: &[Point]) -> f64 {
    segment_pairs(points, true)
        .into_iter()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

fn unit_normal(from: Point, to: Point, side: f64) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= DEGENERATE_LENGTH {
        return (0.0, 0.0);
    }
    (side * -dy / len, side * dx / len)
}

/// Offsets every vertex by `width_units` along the average of its two
/// adjacent edge normals.
///
/// Neighbours wrap around, so the outline is always treated as cyclic.
/// Normals point away from the enclosed area; an outline without area
/// uses the left-hand normal. A vertex whose averaged normal vanishes
/// (both edges degenerate, or edges folding back on each other) stays in
/// place. No self-intersection repair or miter limiting is attempted.
pub fn offset_polygon_for_seam(points: &[Point], width_units: f64) -> Vec<Point> {
    let n = points.len();
    let side = if signed_area(points) > 0.0 { -1.0 } else { 1.0 };

    (0..n)
        .map(|i| {
            let point = points[i];
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];

            let (nx1, ny1) = unit_normal(prev, point, side);
            let (nx2, ny2) = unit_normal(point, next, side);

            let nx = (nx1 + nx2) / 2.0;
            let ny = (ny1 + ny2) / 2.0;
            let len = (nx * nx + ny * ny).sqrt();
            if len <= DEGENERATE_LENGTH {
                return point;
            }

            Point::new(
                point.x + nx / len * width_units,
                point.y + ny / len * width_units,
            )
        })
        .collect()
}

/// Grainline endpoints: the centroid of the piece moved
/// `GRAINLINE_HALF_LENGTH` units both ways along the grainline angle.
///
/// Returns `None` when the piece has no grainline or no points.
pub fn grainline_segment(piece: &PatternPiece) -> Option<(Point, Point)> {
    let grainline = piece.grainline.as_ref()?;
    let center = centroid(&piece.points)?;
    let angle = grainline.angle_degrees.to_radians();
    let (dx, dy) = (
        GRAINLINE_HALF_LENGTH * angle.cos(),
        GRAINLINE_HALF_LENGTH * angle.sin(),
    );
    Some((
        Point::new(center.x - dx, center.y - dy),
        Point::new(center.x + dx, center.y + dy),
    ))
}
