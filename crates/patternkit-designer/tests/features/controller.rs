use patternkit_designer::{
    ControllerOutcome, EventContext, InteractionController, PatternError, PatternPiece,
    PatternStore, PieceKind, Point, PointerEvent, ToolId, ViewTransform,
};

const SURFACE: (f64, f64) = (800.0, 600.0);

fn drag(
    controller: &mut InteractionController,
    store: &mut PatternStore,
    ctx: &EventContext,
    path: &[(f64, f64)],
) -> ControllerOutcome {
    let (first, rest) = path.split_first().unwrap();
    controller.handle(store, PointerEvent::Down { x: first.0, y: first.1 }, ctx);
    for &(x, y) in rest {
        controller.handle(store, PointerEvent::Move { x, y }, ctx);
    }
    let last = path.last().unwrap();
    controller.handle(store, PointerEvent::Up { x: last.0, y: last.1 }, ctx)
}

fn square(id: &str) -> PatternPiece {
    PatternPiece::new(
        id,
        PieceKind::Rectangle,
        vec![
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
            Point::new(100.0, 200.0),
        ],
    )
}

#[test]
fn test_line_tool_commits_two_points() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Line, SURFACE);

    let outcome = drag(
        &mut controller,
        &mut store,
        &ctx,
        &[(10.0, 10.0), (50.0, 30.0), (90.0, 40.0)],
    );
    let ControllerOutcome::Committed { piece_id } = outcome else {
        panic!("expected commit, got {:?}", outcome);
    };
    assert!(piece_id.starts_with("line-"));

    let piece = store.piece(&piece_id).unwrap();
    assert_eq!(piece.kind, PieceKind::Line);
    assert_eq!(piece.points, vec![Point::new(10.0, 10.0), Point::new(90.0, 40.0)]);
    assert!(controller.drawing().is_none());
}

#[test]
fn test_curve_tool_keeps_every_sample() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Curve, SURFACE);

    drag(
        &mut controller,
        &mut store,
        &ctx,
        &[(0.0, 0.0), (5.0, 2.0), (10.0, 3.0), (15.0, 2.0)],
    );
    assert_eq!(store.pieces().len(), 1);
    assert_eq!(store.pieces()[0].points.len(), 4);
}

#[test]
fn test_rectangle_tool_builds_corners() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Rectangle, SURFACE);

    drag(&mut controller, &mut store, &ctx, &[(10.0, 20.0), (60.0, 80.0)]);
    assert_eq!(
        store.pieces()[0].points,
        vec![
            Point::new(10.0, 20.0),
            Point::new(60.0, 20.0),
            Point::new(60.0, 80.0),
            Point::new(10.0, 80.0),
        ]
    );
}

#[test]
fn test_drawing_is_not_committed_before_release() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Curve, SURFACE);

    controller.handle(&mut store, PointerEvent::Down { x: 1.0, y: 1.0 }, &ctx);
    controller.handle(&mut store, PointerEvent::Move { x: 2.0, y: 2.0 }, &ctx);
    assert!(store.pieces().is_empty());
    assert_eq!(controller.drawing().unwrap().points.len(), 2);
}

#[test]
fn test_release_outside_surface_cancels() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Line, SURFACE);

    let outcome = drag(
        &mut controller,
        &mut store,
        &ctx,
        &[(10.0, 10.0), (900.0, 10.0)],
    );
    assert_eq!(outcome, ControllerOutcome::Cancelled);
    assert!(store.pieces().is_empty());
    assert!(store.history().is_empty());
}

#[test]
fn test_press_outside_surface_is_ignored() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::Line, SURFACE);

    let outcome = controller.handle(&mut store, PointerEvent::Down { x: -5.0, y: 10.0 }, &ctx);
    assert_eq!(outcome, ControllerOutcome::Ignored);
    assert!(controller.drawing().is_none());
}

#[test]
fn test_select_hits_outline_and_honours_shift() {
    let mut store = PatternStore::new();
    store.add_piece(square("a")).unwrap();
    let mut b = square("b");
    for p in &mut b.points {
        p.x += 300.0;
    }
    store.add_piece(b).unwrap();
    let mut controller = InteractionController::default();

    let ctx = EventContext::new(ToolId::Select, SURFACE);
    let outcome = controller.handle(&mut store, PointerEvent::Down { x: 150.0, y: 102.0 }, &ctx);
    assert_eq!(outcome, ControllerOutcome::Selected { piece_id: "a".into() });

    let shift = ctx.clone().with_multi_select(true);
    controller.handle(&mut store, PointerEvent::Down { x: 450.0, y: 199.0 }, &shift);
    assert_eq!(store.selected_piece_ids(), ["a", "b"]);

    // Inside the square but away from the outline.
    let outcome = controller.handle(&mut store, PointerEvent::Down { x: 150.0, y: 150.0 }, &ctx);
    assert_eq!(outcome, ControllerOutcome::Missed);
    assert_eq!(store.selected_piece_ids(), ["a", "b"]);
}

#[test]
fn test_select_uses_view_transform() {
    let mut store = PatternStore::new();
    store.add_piece(square("a")).unwrap();
    let mut controller = InteractionController::default();

    // Model (100, 150) on the left edge sits at device (250, 350).
    let ctx = EventContext::new(ToolId::Select, SURFACE)
        .with_transform(ViewTransform::new(50.0, 50.0, 2.0));
    let outcome = controller.handle(&mut store, PointerEvent::Down { x: 250.0, y: 350.0 }, &ctx);
    assert_eq!(outcome, ControllerOutcome::Selected { piece_id: "a".into() });
    assert_eq!(controller.cursor(), Some(Point::new(100.0, 150.0)));
}

#[test]
fn test_cut_tool_splits_primary_selection() {
    let mut store = PatternStore::new();
    store.add_piece(square("a")).unwrap();
    store.select_piece("a", false).unwrap();
    let mut controller = InteractionController::default();

    let ctx = EventContext::new(ToolId::Cut, SURFACE);
    let outcome = controller.handle(&mut store, PointerEvent::Down { x: 200.0, y: 150.0 }, &ctx);
    assert_eq!(
        outcome,
        ControllerOutcome::Cut {
            first_id: "a-1".into(),
            second_id: "a-2".into(),
        }
    );
    assert_eq!(store.pieces().len(), 2);
}

#[test]
fn test_feature_tools_need_a_selection() {
    let mut store = PatternStore::new();
    store.add_piece(square("a")).unwrap();
    let mut controller = InteractionController::default();

    for tool in [ToolId::Cut, ToolId::Grain, ToolId::from("seam-10")] {
        let ctx = EventContext::new(tool, SURFACE);
        let outcome = controller.handle(&mut store, PointerEvent::Down { x: 10.0, y: 10.0 }, &ctx);
        assert_eq!(outcome, ControllerOutcome::Rejected(PatternError::NoSelection));
    }
    assert_eq!(store.history().len(), 1);
}

#[test]
fn test_seam_and_grain_tools() {
    let mut store = PatternStore::new();
    store.add_piece(square("a")).unwrap();
    store.select_piece("a", false).unwrap();
    let mut controller = InteractionController::default();

    let ctx = EventContext::new(ToolId::from("seam-10"), SURFACE);
    let outcome = controller.handle(&mut store, PointerEvent::Down { x: 10.0, y: 10.0 }, &ctx);
    assert_eq!(outcome, ControllerOutcome::SeamApplied { piece_id: "a".into() });
    assert_eq!(store.piece("a").unwrap().seam.as_ref().unwrap().width_units, 10.0);

    let ctx = EventContext::new(ToolId::Grain, SURFACE);
    controller.handle(&mut store, PointerEvent::Down { x: 10.0, y: 10.0 }, &ctx);
    let grain = store.piece("a").unwrap().grainline.unwrap();
    assert_eq!(grain.angle_degrees, 90.0);
}

#[test]
fn test_unknown_tool_is_ignored() {
    let mut store = PatternStore::new();
    let mut controller = InteractionController::default();
    let ctx = EventContext::new(ToolId::from("godet"), SURFACE);

    let outcome = controller.handle(&mut store, PointerEvent::Down { x: 10.0, y: 10.0 }, &ctx);
    assert_eq!(outcome, ControllerOutcome::Ignored);
    assert!(store.history().is_empty());
}
