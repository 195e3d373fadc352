use patternkit_designer::{PatternError, PatternPiece, PatternStore, PieceKind, Point};

fn store_with_selected_line() -> PatternStore {
    let mut store = PatternStore::new();
    store
        .add_piece(PatternPiece::new(
            "line-a",
            PieceKind::Line,
            vec![Point::new(0.0, 0.0), Point::new(20.0, 0.0)],
        ))
        .unwrap();
    store.select_piece("line-a", false).unwrap();
    store
}

#[test]
fn test_copy_then_paste_offsets_by_grid_step() {
    let mut store = store_with_selected_line();
    store.set_grid_spacing(5.0);
    store.copy_selected().unwrap();

    let id = store.paste().unwrap();
    assert_ne!(id, "line-a");
    assert_eq!(
        store.piece(&id).unwrap().points,
        vec![Point::new(5.0, 5.0), Point::new(25.0, 5.0)]
    );
    assert!(!store.piece(&id).unwrap().selected);
}

#[test]
fn test_paste_twice_gives_distinct_ids() {
    let mut store = store_with_selected_line();
    store.copy_selected().unwrap();
    let first = store.paste().unwrap();
    let second = store.paste().unwrap();
    assert_ne!(first, second);
    assert_eq!(store.pieces().len(), 3);
}

#[test]
fn test_paste_moves_seam_outline_with_piece() {
    let mut store = store_with_selected_line();
    store.add_seam_allowance("line-a", 10.0).unwrap();
    let id = store.duplicate_selected().unwrap();

    let seam = store.piece(&id).unwrap().seam.clone().unwrap();
    assert_eq!(
        seam.original_outline,
        vec![Point::new(10.0, 10.0), Point::new(30.0, 10.0)]
    );
}

#[test]
fn test_copy_without_selection() {
    let mut store = PatternStore::new();
    assert_eq!(store.copy_selected().unwrap_err(), PatternError::NoSelection);
    assert_eq!(store.paste().unwrap_err(), PatternError::NoSelection);
}
