use patternkit_designer::geometry::{
    distance_point_to_segment, is_point_near_piece, nearest_segment_index, offset_polygon_for_seam,
};
use patternkit_designer::{PatternPiece, PieceKind, Point};

fn line_piece() -> PatternPiece {
    PatternPiece::new(
        "line-1",
        PieceKind::Line,
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    )
}

#[test]
fn test_near_line_piece() {
    let piece = line_piece();
    assert!(is_point_near_piece(Point::new(5.0, 0.1), &piece, 5.0));
    assert!(!is_point_near_piece(Point::new(5.0, 10.0), &piece, 5.0));
}

#[test]
fn test_threshold_is_strict() {
    let piece = line_piece();
    assert!(!is_point_near_piece(Point::new(5.0, 5.0), &piece, 5.0));
    assert!(is_point_near_piece(Point::new(5.0, 4.999), &piece, 5.0));
}

#[test]
fn test_distance_beyond_endpoint() {
    let d = distance_point_to_segment(
        Point::new(13.0, 4.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
    );
    assert!((d - 5.0).abs() < 1e-12);
}

#[test]
fn test_nearest_segment_on_rectangle_edge() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    assert_eq!(nearest_segment_index(&points, Point::new(10.0, 5.0), true), Some(1));
    assert_eq!(nearest_segment_index(&points, Point::new(-1.0, 5.0), true), Some(3));
    // Without wrap the left edge does not exist.
    assert_eq!(nearest_segment_index(&points, Point::new(-1.0, 5.0), false), Some(0));
}

#[test]
fn test_seam_offset_square_corners() {
    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let offset = offset_polygon_for_seam(&square, 5.0);
    let d = 5.0 / 2f64.sqrt();

    let expected = [
        Point::new(-d, -d),
        Point::new(10.0 + d, -d),
        Point::new(10.0 + d, 10.0 + d),
        Point::new(-d, 10.0 + d),
    ];
    for (got, want) in offset.iter().zip(expected.iter()) {
        assert!(got.x.is_finite() && got.y.is_finite());
        assert!(got.distance_to(want) < 1e-9, "got {:?}, want {:?}", got, want);
    }
}

#[test]
fn test_seam_offset_single_point_stays() {
    let offset = offset_polygon_for_seam(&[Point::new(3.0, 4.0)], 10.0);
    assert_eq!(offset, vec![Point::new(3.0, 4.0)]);
}
