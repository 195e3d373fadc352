//! Pattern editing session state.

use serde::{Deserialize, Serialize};

use patternkit_core::constants::{DEFAULT_FABRIC_WIDTH, DEFAULT_GRID_SPACING};

use crate::history::HistoryLog;
use crate::model::PatternPiece;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub spacing_units: f64,
    pub visible: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            spacing_units: DEFAULT_GRID_SPACING,
            visible: true,
        }
    }
}

/// Everything the editor knows about the pattern being drafted.
///
/// `pieces` is kept in insertion order, which is also paint order (later
/// pieces draw on top). Every id in `selected_piece_ids` names a piece in
/// `pieces`; the store prunes selections whenever it removes a piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternState {
    pub pieces: Vec<PatternPiece>,
    pub selected_piece_ids: Vec<String>,
    pub zoom_factor: f64,
    pub history: HistoryLog,
    pub clipboard: Option<PatternPiece>,
    pub fabric_width_units: f64,
    pub grid: GridSettings,
}

impl Default for PatternState {
    fn default() -> Self {
        Self {
            pieces: Vec::new(),
            selected_piece_ids: Vec::new(),
            zoom_factor: 1.0,
            history: HistoryLog::new(),
            clipboard: None,
            fabric_width_units: DEFAULT_FABRIC_WIDTH,
            grid: GridSettings::default(),
        }
    }
}

impl PatternState {
    pub fn piece(&self, id: &str) -> Option<&PatternPiece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub(crate) fn piece_index(&self, id: &str) -> Option<usize> {
        self.pieces.iter().position(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.piece_index(id).is_some()
    }

    /// First entry of the selection list.
    pub fn primary_selection(&self) -> Option<&str> {
        self.selected_piece_ids.first().map(String::as_str)
    }

    /// Bounds of all pieces, `None` for an empty pattern.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.pieces
            .iter()
            .filter_map(PatternPiece::bounds)
            .reduce(|(ax1, ay1, ax2, ay2), (bx1, by1, bx2, by2)| {
                (ax1.min(bx1), ay1.min(by1), ax2.max(bx2), ay2.max(by2))
            })
    }
}
