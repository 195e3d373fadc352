//! Interaction controller: turns pointer events into pattern store calls.
//!
//! All UI state the controller needs (active tool, surface size, view
//! transform, modifier keys) arrives with each event in an
//! [`EventContext`]. Device coordinates are converted to model space here,
//! never in the geometry kernel.

use serde::{Deserialize, Serialize};

use patternkit_core::constants::HIT_TEST_TOLERANCE;
use patternkit_core::PatternError;

use crate::geometry::is_point_near_piece;
use crate::model::{GrainlineKind, PatternPiece, PieceKind, PieceStyle, Point};
use crate::store::PatternStore;
use crate::tools::ToolId;
use crate::viewport::ViewTransform;

/// Raw pointer event in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> (f64, f64) {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => {
                (x, y)
            }
        }
    }
}

/// UI state accompanying one pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext {
    pub selected_tool: ToolId,
    pub viewport_size: (f64, f64),
    pub view_transform: ViewTransform,
    /// Multi-select modifier (shift) held.
    pub multi_select: bool,
}

impl EventContext {
    pub fn new(selected_tool: ToolId, viewport_size: (f64, f64)) -> Self {
        Self {
            selected_tool,
            viewport_size,
            view_transform: ViewTransform::IDENTITY,
            multi_select: false,
        }
    }

    pub fn with_transform(mut self, view_transform: ViewTransform) -> Self {
        self.view_transform = view_transform;
        self
    }

    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    fn contains_device(&self, x: f64, y: f64) -> bool {
        let (w, h) = self.viewport_size;
        x >= 0.0 && y >= 0.0 && x <= w && y <= h
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerOutcome {
    /// Nothing to do for this event and tool.
    Ignored,
    /// A drawing gesture started or was extended.
    Drawing,
    /// A drawing gesture ended outside the surface and was dropped.
    Cancelled,
    Committed { piece_id: String },
    Selected { piece_id: String },
    /// A select click that touched no piece.
    Missed,
    Cut { first_id: String, second_id: String },
    SeamApplied { piece_id: String },
    GrainlineApplied { piece_id: String },
    /// The store refused the operation; the pattern is unchanged.
    Rejected(PatternError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub hit_test_tolerance: f64,
    pub default_style: PieceStyle,
    /// Angle used by the grain tool.
    pub grain_angle_degrees: f64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            hit_test_tolerance: HIT_TEST_TOLERANCE,
            default_style: PieceStyle::default(),
            grain_angle_degrees: 90.0,
        }
    }
}

/// An in-progress drawing gesture. Nothing reaches the store until pointer up.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    pub kind: PieceKind,
    pub anchor: Point,
    pub points: Vec<Point>,
}

impl DrawingSession {
    fn start(kind: PieceKind, at: Point) -> Self {
        Self {
            kind,
            anchor: at,
            points: vec![at],
        }
    }

    fn extend(&mut self, to: Point) {
        match self.kind {
            PieceKind::Line => {
                if self.points.len() > 1 {
                    self.points.pop();
                }
                self.points.push(to);
            }
            PieceKind::Curve => self.points.push(to),
            PieceKind::Rectangle | PieceKind::Circle => {
                let a = self.anchor;
                self.points = vec![
                    a,
                    Point::new(to.x, a.y),
                    to,
                    Point::new(a.x, to.y),
                ];
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    settings: ControllerSettings,
    drawing: Option<DrawingSession>,
    cursor: Option<Point>,
}

impl InteractionController {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            drawing: None,
            cursor: None,
        }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Gesture being drawn, for preview rendering.
    pub fn drawing(&self) -> Option<&DrawingSession> {
        self.drawing.as_ref()
    }

    /// Last pointer position in model coordinates.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Drops an unfinished gesture without committing anything.
    pub fn cancel(&mut self) {
        self.drawing = None;
    }

    pub fn handle(
        &mut self,
        store: &mut PatternStore,
        event: PointerEvent,
        ctx: &EventContext,
    ) -> ControllerOutcome {
        let (dx, dy) = event.position();
        let inside = ctx.contains_device(dx, dy);
        let point = ctx.view_transform.to_model(dx, dy);
        self.cursor = Some(point);

        let outcome = match event {
            PointerEvent::Down { .. } if !inside => ControllerOutcome::Ignored,
            PointerEvent::Down { .. } => self.pointer_down(store, point, ctx),
            PointerEvent::Move { .. } => match self.drawing.as_mut() {
                Some(session) => {
                    session.extend(point);
                    ControllerOutcome::Drawing
                }
                None => ControllerOutcome::Ignored,
            },
            PointerEvent::Up { .. } => match self.drawing.take() {
                Some(_) if !inside => {
                    tracing::debug!("drawing released outside the surface, discarded");
                    ControllerOutcome::Cancelled
                }
                Some(session) => self.commit(store, session),
                None => ControllerOutcome::Ignored,
            },
        };

        if let ControllerOutcome::Rejected(err) = &outcome {
            tracing::warn!(tool = %ctx.selected_tool, "pointer action rejected: {}", err);
        }
        outcome
    }

    fn pointer_down(
        &mut self,
        store: &mut PatternStore,
        point: Point,
        ctx: &EventContext,
    ) -> ControllerOutcome {
        if let Some(kind) = ctx.selected_tool.drawn_kind() {
            return self.begin(kind, point);
        }

        match &ctx.selected_tool {
            ToolId::Select => {
                let tolerance = self.settings.hit_test_tolerance;
                let hit = store
                    .pieces()
                    .iter()
                    .find(|piece| is_point_near_piece(point, piece, tolerance))
                    .map(|piece| piece.id.clone());
                match hit {
                    Some(id) => match store.select_piece(&id, ctx.multi_select) {
                        Ok(()) => ControllerOutcome::Selected { piece_id: id },
                        Err(err) => ControllerOutcome::Rejected(err),
                    },
                    None => ControllerOutcome::Missed,
                }
            }
            ToolId::Cut => with_primary(store, |store, id| {
                store
                    .cut_line(&id, point)
                    .map(|(first_id, second_id)| ControllerOutcome::Cut {
                        first_id,
                        second_id,
                    })
            }),
            ToolId::Seam(width) => {
                let width = *width;
                with_primary(store, |store, id| {
                    store
                        .add_seam_allowance(&id, width)
                        .map(|()| ControllerOutcome::SeamApplied { piece_id: id })
                })
            }
            ToolId::Grain => {
                let angle = self.settings.grain_angle_degrees;
                with_primary(store, |store, id| {
                    store
                        .add_grain_line(&id, GrainlineKind::Straight, angle)
                        .map(|()| ControllerOutcome::GrainlineApplied { piece_id: id })
                })
            }
            _ => ControllerOutcome::Ignored,
        }
    }

    fn begin(&mut self, kind: PieceKind, at: Point) -> ControllerOutcome {
        self.drawing = Some(DrawingSession::start(kind, at));
        ControllerOutcome::Drawing
    }

    fn commit(&mut self, store: &mut PatternStore, session: DrawingSession) -> ControllerOutcome {
        let id = store.generate_piece_id(session.kind.id_prefix());
        let piece = PatternPiece::new(id.clone(), session.kind, session.points)
            .with_style(self.settings.default_style.clone());
        match store.add_piece(piece) {
            Ok(()) => ControllerOutcome::Committed { piece_id: id },
            Err(err) => ControllerOutcome::Rejected(err),
        }
    }
}

/// Runs `op` against the first selected piece.
fn with_primary<F>(store: &mut PatternStore, op: F) -> ControllerOutcome
where
    F: FnOnce(&mut PatternStore, String) -> patternkit_core::Result<ControllerOutcome>,
{
    let Some(id) = store.primary_selection().map(str::to_string) else {
        return ControllerOutcome::Rejected(PatternError::NoSelection);
    };
    op(store, id).unwrap_or_else(ControllerOutcome::Rejected)
}
