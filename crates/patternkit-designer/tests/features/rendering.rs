use image::Rgb;
use patternkit_designer::{
    render_pattern, render_to_image, EventContext, InteractionController, Overlay, PatternStore,
    Point, PointerEvent, RenderSink, StrokeStyle, ToolId, Viewport,
};

#[derive(Default)]
struct CountingSink {
    polylines: usize,
    smooth: usize,
    markers: Vec<String>,
}

impl RenderSink for CountingSink {
    fn draw_polyline(&mut self, _points: &[Point], _style: &StrokeStyle, _closed: bool, smooth: bool) {
        self.polylines += 1;
        if smooth {
            self.smooth += 1;
        }
    }

    fn draw_marker(&mut self, _center: Point, _radius: f64, color: &str) {
        self.markers.push(color.to_string());
    }
}

#[test]
fn test_preview_is_drawn_while_dragging() {
    let mut store = PatternStore::new();
    store.set_grid_visible(false);
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Curve, (200.0, 200.0));

    controller.handle(&mut store, PointerEvent::Down { x: 10.0, y: 10.0 }, &ctx);
    controller.handle(&mut store, PointerEvent::Move { x: 20.0, y: 15.0 }, &ctx);
    controller.handle(&mut store, PointerEvent::Move { x: 30.0, y: 10.0 }, &ctx);

    let overlay = Overlay::from_controller(&controller, &ctx.selected_tool);
    let mut sink = CountingSink::default();
    render_pattern(store.state(), &overlay, (200.0, 200.0), &mut sink);

    assert_eq!(sink.polylines, 1);
    assert_eq!(sink.smooth, 1);
    assert!(sink.markers.is_empty());
}

#[test]
fn test_cut_cursor_marker() {
    let mut store = PatternStore::new();
    store.set_grid_visible(false);
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Cut, (200.0, 200.0));
    controller.handle(&mut store, PointerEvent::Move { x: 50.0, y: 50.0 }, &ctx);

    let overlay = Overlay::from_controller(&controller, &ctx.selected_tool);
    let img = render_to_image(store.state(), &overlay, &Viewport::new(100.0, 100.0));
    assert_eq!(img.get_pixel(50, 50), &Rgb([255, 0, 0]));
    assert_eq!(img.get_pixel(10, 10), &Rgb([255, 255, 255]));
}

#[test]
fn test_committed_rectangle_is_rendered() {
    let mut store = PatternStore::new();
    store.set_grid_visible(false);
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Rectangle, (100.0, 100.0));

    controller.handle(&mut store, PointerEvent::Down { x: 20.0, y: 20.0 }, &ctx);
    controller.handle(&mut store, PointerEvent::Move { x: 80.0, y: 80.0 }, &ctx);
    controller.handle(&mut store, PointerEvent::Up { x: 80.0, y: 80.0 }, &ctx);

    let img = render_to_image(store.state(), &Overlay::default(), &Viewport::new(100.0, 100.0));
    assert_eq!(img.get_pixel(50, 20), &Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(20, 50), &Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(50, 50), &Rgb([255, 255, 255]));
}
