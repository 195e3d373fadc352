use patternkit_designer::{ActionKind, PatternStore, PieceChange, Point};

#[test]
fn test_each_mutation_appends_history() {
    let mut store = PatternStore::new();
    let id = store
        .add_curve(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ])
        .unwrap();
    assert_eq!(store.history().len(), 1);

    store
        .add_grain_line(&id, patternkit_designer::GrainlineKind::Straight, 90.0)
        .unwrap();
    store.add_seam_allowance(&id, 10.0).unwrap();
    store.cut_line(&id, Point::new(2.0, 2.0)).unwrap();

    let names: Vec<_> = store.history().iter().map(|a| a.kind.name()).collect();
    assert_eq!(
        names,
        vec!["add", "modify", "modify", "delete", "add", "add"]
    );
}

#[test]
fn test_history_timestamps_are_monotonic() {
    let mut store = PatternStore::new();
    for _ in 0..3 {
        store
            .add_curve(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .unwrap();
    }
    let stamps: Vec<i64> = store.history().iter().map(|a| a.timestamp_millis).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_rejected_operations_leave_history_alone() {
    let mut store = PatternStore::new();
    assert!(store.add_seam_allowance("missing", 5.0).is_err());
    assert!(store.cut_line("missing", Point::new(0.0, 0.0)).is_err());
    assert!(store.history().is_empty());
}

#[test]
fn test_modify_payload_carries_change() {
    let mut store = PatternStore::new();
    let id = store
        .add_curve(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
        .unwrap();
    store.add_seam_allowance(&id, 15.0).unwrap();

    match &store.history().last().unwrap().kind {
        ActionKind::Modify {
            piece_id,
            change: PieceChange::SeamAllowance { seam },
        } => {
            assert_eq!(piece_id, &id);
            assert_eq!(seam.width_units, 15.0);
            assert_eq!(seam.original_outline.len(), 2);
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_history_json_shape() {
    let mut store = PatternStore::new();
    store
        .add_curve(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)])
        .unwrap();
    let json = serde_json::to_value(store.history()).unwrap();
    let entry = &json[0];
    assert_eq!(entry["type"], "add");
    assert!(entry["timestamp_millis"].is_i64());
    assert_eq!(entry["piece"]["kind"], "curve");
}
