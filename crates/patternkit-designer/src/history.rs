//! Append-only log of committed pattern mutations.
//!
//! Every mutation of the pattern store records one or more
//! [`PatternAction`]s. Entries are never rewritten or removed and nothing
//! replays them yet; the typed payloads exist so a later undo layer can.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{Grainline, PatternPiece, SeamAllowance};

/// Change applied to an existing piece by a `Modify` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum PieceChange {
    Grainline { grainline: Grainline },
    SeamAllowance { seam: SeamAllowance },
}

/// Type-tagged history payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    Add { piece: PatternPiece },
    Modify { piece_id: String, change: PieceChange },
    Delete { piece: PatternPiece },
    Group { piece_ids: Vec<String> },
    Ungroup { piece_ids: Vec<String> },
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Add { .. } => "add",
            ActionKind::Modify { .. } => "modify",
            ActionKind::Delete { .. } => "delete",
            ActionKind::Group { .. } => "group",
            ActionKind::Ungroup { .. } => "ungroup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAction {
    #[serde(flatten)]
    pub kind: ActionKind,
    pub timestamp_millis: i64,
}

impl PatternAction {
    /// Creates an action stamped with the current wall clock time.
    pub fn now(kind: ActionKind) -> Self {
        Self {
            kind,
            timestamp_millis: Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<PatternAction>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, action: PatternAction) {
        tracing::trace!(kind = action.kind.name(), "history record");
        self.entries.push(action);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&PatternAction> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PatternAction> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[PatternAction] {
        &self.entries
    }
}
