//! Pattern store: the single owner and writer of the pattern state.
//!
//! Every mutation either commits completely and appends history, or
//! returns an error and leaves the state exactly as it was. Callers that
//! addressed a missing piece get [`PatternError::PieceNotFound`] and are
//! free to log and ignore it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use patternkit_core::constants::{MAX_ZOOM, MIN_ZOOM};
use patternkit_core::{PatternError, Result};

use crate::geometry::{nearest_segment_index, offset_polygon_for_seam};
use crate::history::{ActionKind, HistoryLog, PatternAction, PieceChange};
use crate::model::{
    ClosurePolicy, ClosurePurpose, Grainline, GrainlineKind, PatternPiece, PieceKind, PieceStyle,
    Point, SeamAllowance, SeamKind,
};
use crate::state::{GridSettings, PatternState};

/// How repeated multi-selects of the same piece are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Ordered list that keeps repeats: selecting a piece twice lists it twice.
    #[default]
    Multiset,
    /// Ordered list without repeats: re-selecting keeps the original position.
    Set,
}

/// Behaviour knobs for the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreOptions {
    pub selection: SelectionPolicy,
    pub closure: ClosurePolicy,
    /// Style given to pieces created by the store itself (e.g. `add_curve`).
    pub default_style: PieceStyle,
}

#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    state: PatternState,
    options: StoreOptions,
    id_sequence: u64,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Starts the session from an existing state (e.g. one with custom fabric width).
    pub fn with_state(state: PatternState, options: StoreOptions) -> Self {
        Self {
            state,
            options,
            id_sequence: 0,
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn state(&self) -> &PatternState {
        &self.state
    }

    pub fn pieces(&self) -> &[PatternPiece] {
        &self.state.pieces
    }

    pub fn piece(&self, id: &str) -> Option<&PatternPiece> {
        self.state.piece(id)
    }

    pub fn selected_piece_ids(&self) -> &[String] {
        &self.state.selected_piece_ids
    }

    pub fn primary_selection(&self) -> Option<&str> {
        self.state.primary_selection()
    }

    pub fn grid(&self) -> &GridSettings {
        &self.state.grid
    }

    pub fn history(&self) -> &HistoryLog {
        &self.state.history
    }

    /// Generates a session-unique id of the form `{prefix}-{millis}-{sequence}`.
    pub fn generate_piece_id(&mut self, prefix: &str) -> String {
        loop {
            self.id_sequence += 1;
            let id = format!(
                "{}-{}-{}",
                prefix,
                Utc::now().timestamp_millis(),
                self.id_sequence
            );
            if !self.state.contains(&id) {
                return id;
            }
        }
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.state
            .piece_index(id)
            .ok_or_else(|| PatternError::not_found(id))
    }

    fn log(&mut self, kind: ActionKind) {
        self.state.history.record(PatternAction::now(kind));
    }

    fn sync_selected_flags(&mut self) {
        let selected = &self.state.selected_piece_ids;
        for piece in &mut self.state.pieces {
            piece.selected = selected.iter().any(|id| *id == piece.id);
        }
    }

    fn prune_selection(&mut self, removed_id: &str) {
        self.state.selected_piece_ids.retain(|id| id != removed_id);
    }

    /// Appends a piece on top of the paint order.
    ///
    /// Rejects pieces without points and ids already in use.
    pub fn add_piece(&mut self, mut piece: PatternPiece) -> Result<()> {
        if piece.points.is_empty() {
            return Err(PatternError::invalid_shape(
                piece.id,
                "a piece needs at least one point",
            ));
        }
        if self.state.contains(&piece.id) {
            return Err(PatternError::DuplicatePieceId { id: piece.id });
        }

        piece.selected = false;
        tracing::debug!(piece_id = %piece.id, kind = %piece.kind, points = piece.points.len(), "add piece");
        self.state.pieces.push(piece.clone());
        self.log(ActionKind::Add { piece });
        Ok(())
    }

    /// Creates a curve piece with the default style and returns its id.
    pub fn add_curve(&mut self, points: Vec<Point>) -> Result<String> {
        let id = self.generate_piece_id(PieceKind::Curve.id_prefix());
        let piece = PatternPiece::new(id.clone(), PieceKind::Curve, points)
            .with_style(self.options.default_style.clone());
        self.add_piece(piece)?;
        Ok(id)
    }

    /// Selects a piece. Without `multi_select` the selection becomes `[id]`,
    /// with it the id is appended according to the selection policy.
    pub fn select_piece(&mut self, id: &str, multi_select: bool) -> Result<()> {
        self.index_of(id)?;

        let selection = &mut self.state.selected_piece_ids;
        if !multi_select {
            selection.clear();
            selection.push(id.to_string());
        } else {
            let already = selection.iter().any(|s| s == id);
            if !(already && self.options.selection == SelectionPolicy::Set) {
                selection.push(id.to_string());
            }
        }
        self.sync_selected_flags();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_piece_ids.clear();
        self.sync_selected_flags();
    }

    /// Sets the grainline of a piece, replacing any previous one.
    pub fn add_grain_line(
        &mut self,
        piece_id: &str,
        kind: GrainlineKind,
        angle_degrees: f64,
    ) -> Result<()> {
        let index = self.index_of(piece_id)?;
        if self.state.pieces[index].points.is_empty() {
            return Err(PatternError::invalid_shape(
                piece_id,
                "a grainline needs at least one point",
            ));
        }

        let grainline = Grainline {
            kind,
            angle_degrees,
        };
        self.state.pieces[index].grainline = Some(grainline);
        tracing::debug!(piece_id, ?kind, angle_degrees, "add grainline");
        self.log(ActionKind::Modify {
            piece_id: piece_id.to_string(),
            change: PieceChange::Grainline { grainline },
        });
        Ok(())
    }

    /// Replaces the outline of a piece by its seam allowance offset.
    ///
    /// The outline before the offset is kept in `seam.original_outline`.
    pub fn add_seam_allowance(&mut self, piece_id: &str, width_units: f64) -> Result<()> {
        let index = self.index_of(piece_id)?;
        let piece = &mut self.state.pieces[index];
        if piece.points.is_empty() {
            return Err(PatternError::invalid_shape(
                piece_id,
                "a seam allowance needs at least one point",
            ));
        }

        let offset = offset_polygon_for_seam(&piece.points, width_units);
        let original_outline = std::mem::replace(&mut piece.points, offset);
        let seam = SeamAllowance {
            width_units,
            kind: SeamKind::Normal,
            original_outline,
        };
        piece.seam = Some(seam.clone());

        tracing::debug!(piece_id, width_units, "add seam allowance");
        self.log(ActionKind::Modify {
            piece_id: piece_id.to_string(),
            change: PieceChange::SeamAllowance { seam },
        });
        Ok(())
    }

    /// Splits a piece at the segment nearest to `cut_point`.
    ///
    /// The nearest segment is searched without a distance limit, so some
    /// segment is always found. The first child keeps the points up to the
    /// segment start followed by the cut point, the second starts at the cut
    /// point and keeps the rest. Cutting the wrap segment gives the second
    /// child the first point back so it still has two points. That cut
    /// leaves `n + 3` points across both children, one more than any other
    /// cut, since the first point appears in each.
    ///
    /// Children are named `{id}-1` and `{id}-2`, inherit kind, style,
    /// grainline and seam, and are appended after the parent is removed.
    pub fn cut_line(&mut self, piece_id: &str, cut_point: Point) -> Result<(String, String)> {
        let index = self.index_of(piece_id)?;
        let parent = &self.state.pieces[index];
        let n = parent.points.len();
        if n < 2 {
            return Err(PatternError::invalid_shape(
                piece_id,
                "cutting needs at least 2 points",
            ));
        }

        let cyclic = self.options.closure.is_closed(parent.kind, ClosurePurpose::Cut);
        let segment = nearest_segment_index(&parent.points, cut_point, cyclic)
            .ok_or_else(|| PatternError::invalid_shape(piece_id, "no segment to cut"))?;

        let mut first_points = parent.points[..=segment].to_vec();
        first_points.push(cut_point);

        let mut second_points = vec![cut_point];
        if segment + 1 < n {
            second_points.extend_from_slice(&parent.points[segment + 1..]);
        } else {
            second_points.push(parent.points[0]);
        }

        let first_id = format!("{}-1", piece_id);
        let second_id = format!("{}-2", piece_id);
        for id in [&first_id, &second_id] {
            if self.state.contains(id) {
                return Err(PatternError::DuplicatePieceId { id: id.clone() });
            }
        }

        let child = |id: &str, points: Vec<Point>| PatternPiece {
            id: id.to_string(),
            points,
            selected: false,
            ..parent.clone()
        };
        let first = child(&first_id, first_points);
        let second = child(&second_id, second_points);

        tracing::debug!(piece_id, segment, ?cut_point, "cut piece");
        let parent = self.state.pieces.remove(index);
        self.prune_selection(piece_id);
        self.state.pieces.push(first.clone());
        self.state.pieces.push(second.clone());
        self.sync_selected_flags();

        self.log(ActionKind::Delete { piece: parent });
        self.log(ActionKind::Add { piece: first });
        self.log(ActionKind::Add { piece: second });
        Ok((first_id, second_id))
    }

    /// Removes a piece and any selection of it.
    pub fn delete_piece(&mut self, piece_id: &str) -> Result<PatternPiece> {
        let index = self.index_of(piece_id)?;
        let piece = self.state.pieces.remove(index);
        self.prune_selection(piece_id);
        tracing::debug!(piece_id, "delete piece");
        self.log(ActionKind::Delete {
            piece: piece.clone(),
        });
        Ok(piece)
    }

    /// Removes every selected piece. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let mut ids = self.state.selected_piece_ids.clone();
        ids.dedup();
        let mut removed = 0;
        for id in ids {
            if self.delete_piece(&id).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    /// Puts a copy of the primary selection on the clipboard.
    pub fn copy_selected(&mut self) -> Result<()> {
        let id = self.primary_selection().ok_or(PatternError::NoSelection)?;
        let piece = self
            .piece(id)
            .cloned()
            .ok_or_else(|| PatternError::not_found(id))?;
        self.state.clipboard = Some(piece);
        Ok(())
    }

    /// Adds a copy of the clipboard piece, shifted by one grid step so it
    /// does not hide the original. Returns the new id.
    pub fn paste(&mut self) -> Result<String> {
        let mut piece = self.state.clipboard.clone().ok_or(PatternError::NoSelection)?;
        let step = self.state.grid.spacing_units;
        piece.id = self.generate_piece_id(piece.kind.id_prefix());
        for p in &mut piece.points {
            p.x += step;
            p.y += step;
        }
        if let Some(seam) = piece.seam.as_mut() {
            for p in &mut seam.original_outline {
                p.x += step;
                p.y += step;
            }
        }
        let id = piece.id.clone();
        self.add_piece(piece)?;
        Ok(id)
    }

    /// Copies the primary selection and pastes it in one step.
    pub fn duplicate_selected(&mut self) -> Result<String> {
        self.copy_selected()?;
        self.paste()
    }

    /// Sets the zoom factor, clamped to the supported range.
    pub fn set_zoom(&mut self, factor: f64) {
        if factor.is_finite() {
            self.state.zoom_factor = factor.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.state.grid.visible = visible;
    }

    /// Sets the grid spacing. Non-positive spacing is ignored.
    pub fn set_grid_spacing(&mut self, spacing_units: f64) {
        if spacing_units > 0.0 && spacing_units.is_finite() {
            self.state.grid.spacing_units = spacing_units;
        }
    }

    /// Sets the fabric width. Non-positive widths are ignored.
    pub fn set_fabric_width(&mut self, width_units: f64) {
        if width_units > 0.0 && width_units.is_finite() {
            self.state.fabric_width_units = width_units;
        }
    }
}
