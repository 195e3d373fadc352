//! Viewport and coordinate transformation for the drafting surface.
//!
//! Device coordinates are surface pixels (0,0 at top-left, +Y down).
//! Model coordinates are pattern units in the same orientation:
//!
//! ```text
//! device = model * scale + pan
//! model  = (device - pan) / scale
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use patternkit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use crate::model::Point;

/// Pan offset and scale factor mapping model space onto the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        pan_x: 0.0,
        pan_y: 0.0,
        scale: 1.0,
    };

    pub fn new(pan_x: f64, pan_y: f64, scale: f64) -> Self {
        Self {
            pan_x,
            pan_y,
            scale,
        }
    }

    /// Converts device coordinates to model coordinates.
    pub fn to_model(&self, device_x: f64, device_y: f64) -> Point {
        Point::new(
            (device_x - self.pan_x) / self.scale,
            (device_y - self.pan_y) / self.scale,
        )
    }

    /// Converts model coordinates to device coordinates.
    pub fn to_device(&self, point: &Point) -> (f64, f64) {
        (
            point.x * self.scale + self.pan_x,
            point.y * self.scale + self.pan_y,
        )
    }
}

/// Represents the viewport state (zoom, pan and surface size).
#[derive(Debug, Clone)]
pub struct Viewport {
    transform: ViewTransform,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            canvas_width,
            canvas_height,
        }
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    /// Sets the surface dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn zoom(&self) -> f64 {
        self.transform.scale
    }

    /// Sets the zoom level, clamped to `MIN_ZOOM..=MAX_ZOOM`. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.transform.scale = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom() * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom() / ZOOM_STEP);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform.pan_x += dx;
        self.transform.pan_y += dy;
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.transform.pan_x = x;
        self.transform.pan_y = y;
    }

    pub fn device_to_model(&self, device_x: f64, device_y: f64) -> Point {
        self.transform.to_model(device_x, device_y)
    }

    pub fn model_to_device(&self, point: &Point) -> (f64, f64) {
        self.transform.to_device(point)
    }

    /// Zooms while keeping `model_point` at the same device position.
    pub fn zoom_to_point(&mut self, model_point: &Point, new_zoom: f64) {
        if !new_zoom.is_finite() {
            return;
        }
        let new_zoom = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let (device_x, device_y) = self.model_to_device(model_point);
        self.transform.scale = new_zoom;
        self.transform.pan_x = device_x - model_point.x * new_zoom;
        self.transform.pan_y = device_y - model_point.y * new_zoom;
    }

    /// Fits the given bounds into the surface, keeping `padding` (fraction of
    /// the surface, 0.0 - 0.5) free on every side, and centers the content.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }
        let width = max_x - min_x;
        let height = max_y - min_y;

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / width;
        let zoom_y = (self.canvas_height * padding_factor) / height;
        let zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        self.transform.scale = zoom;
        self.transform.pan_x = (self.canvas_width - width * zoom) / 2.0 - min_x * zoom;
        self.transform.pan_y = (self.canvas_height - height * zoom) / 2.0 - min_y * zoom;
    }

    pub fn reset(&mut self) {
        self.transform = ViewTransform::IDENTITY;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.transform.scale, self.transform.pan_x, self.transform.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
