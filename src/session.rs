//! Scripted editing sessions.
//!
//! A script is a list of steps, each naming the active tool and carrying
//! the pointer events performed with it:
//!
//! ```json
//! {
//!   "view": { "pan_x": 0.0, "pan_y": 0.0, "scale": 1.0 },
//!   "steps": [
//!     { "tool": "rectangle", "events": [
//!         { "event": "down", "x": 10, "y": 10 },
//!         { "event": "move", "x": 60, "y": 40 },
//!         { "event": "up", "x": 60, "y": 40 } ] },
//!     { "tool": "select", "shift": true, "events": [ { "event": "down", "x": 10, "y": 20 } ] }
//!   ]
//! }
//! ```

use image::RgbImage;
use serde::{Deserialize, Serialize};

use patternkit_core::constants::VIEW_PADDING;
use patternkit_designer::{
    render_to_image, ControllerOutcome, EventContext, InteractionController, Overlay,
    PatternState, PatternStore, PointerEvent, ToolId, ViewTransform, Viewport,
};
use patternkit_settings::Config;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub tool: String,
    /// Multi-select modifier held for every event of the step.
    #[serde(default)]
    pub shift: bool,
    pub events: Vec<PointerEvent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    /// View transform applied to every event; the configured zoom when absent.
    #[serde(default)]
    pub view: Option<ViewTransform>,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// A store and controller configured from one [`Config`].
pub struct Session {
    store: PatternStore,
    controller: InteractionController,
    viewport: Viewport,
    tool: ToolId,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            store: PatternStore::with_state(config.initial_state(), config.store_options()),
            controller: InteractionController::new(config.controller_settings()),
            viewport: config.viewport(),
            tool: ToolId::Select,
        }
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Tool of the last step played.
    pub fn tool(&self) -> &ToolId {
        &self.tool
    }

    pub fn state(&self) -> &PatternState {
        self.store.state()
    }

    /// Replays every step and returns the outcome of each event in order.
    pub fn play(&mut self, script: &Script) -> Vec<ControllerOutcome> {
        if let Some(view) = script.view {
            self.viewport.set_pan(view.pan_x, view.pan_y);
            self.viewport.set_zoom(view.scale);
            self.sync_zoom();
        }

        let mut outcomes = Vec::new();
        for (index, step) in script.steps.iter().enumerate() {
            self.tool = ToolId::from(step.tool.as_str());
            let ctx = EventContext::new(self.tool.clone(), self.viewport.size())
                .with_transform(self.viewport.transform())
                .with_multi_select(step.shift);

            tracing::debug!(step = index, tool = %self.tool, events = step.events.len(), "play step");
            for event in &step.events {
                let outcome = self.controller.handle(&mut self.store, *event, &ctx);
                outcomes.push(outcome);
            }
        }

        tracing::info!(
            steps = script.steps.len(),
            pieces = self.store.pieces().len(),
            history = self.store.history().len(),
            "script finished"
        );
        outcomes
    }

    /// Fits the view to the pattern bounds. An empty pattern keeps the current view.
    pub fn fit_view(&mut self) {
        if let Some((min_x, min_y, max_x, max_y)) = self.store.state().bounds() {
            self.viewport
                .fit_to_bounds(min_x, min_y, max_x, max_y, VIEW_PADDING);
            self.sync_zoom();
        }
    }

    /// Rasterises the pattern at the zoom factor recorded in the state.
    pub fn render(&self) -> RgbImage {
        let mut viewport = self.viewport.clone();
        viewport.set_zoom(self.store.state().zoom_factor);
        let overlay = Overlay::from_controller(&self.controller, &self.tool);
        render_to_image(self.store.state(), &overlay, &viewport)
    }

    fn sync_zoom(&mut self) {
        self.store.set_zoom(self.viewport.zoom());
    }
}
