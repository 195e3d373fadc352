use patternkit_designer::{Point, ViewTransform, Viewport};

#[test]
fn test_device_to_model_inverts_pan_and_scale() {
    let t = ViewTransform::new(100.0, 50.0, 4.0);
    assert_eq!(t.to_model(140.0, 90.0), Point::new(10.0, 10.0));
}

#[test]
fn test_viewport_pan_and_zoom() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.pan_by(20.0, -10.0);
    vp.set_zoom(2.0);
    assert_eq!(vp.device_to_model(40.0, 10.0), Point::new(10.0, 10.0));

    vp.set_zoom(0.05);
    assert_eq!(vp.zoom(), 0.1);
}

#[test]
fn test_zoom_bounds_are_inclusive() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(50.0);
    assert_eq!(vp.zoom(), 50.0);
    vp.set_zoom(0.1);
    assert_eq!(vp.zoom(), 0.1);

    vp.zoom_to_point(&Point::new(10.0, 10.0), 80.0);
    assert_eq!(vp.zoom(), 50.0);
}

#[test]
fn test_fit_to_bounds_with_padding() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.fit_to_bounds(0.0, 0.0, 200.0, 100.0, 0.1);

    // 80% of the surface is available: 800 x 400 for 200 x 100.
    assert!((vp.zoom() - 4.0).abs() < 1e-9);
    let (x0, y0) = vp.model_to_device(&Point::new(0.0, 0.0));
    assert!((x0 - 100.0).abs() < 1e-9);
    assert!((y0 - 50.0).abs() < 1e-9);
}

#[test]
fn test_fit_to_empty_bounds_is_noop() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.fit_to_bounds(5.0, 5.0, 5.0, 5.0, 0.05);
    assert_eq!(vp.transform(), ViewTransform::IDENTITY);
}
