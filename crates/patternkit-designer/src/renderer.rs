//! Raster render sink backed by tiny-skia.

use image::{Rgb, RgbImage};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::model::Point;
use crate::render::{render_pattern, Overlay, RenderSink, StrokeStyle};
use crate::state::PatternState;
use crate::viewport::Viewport;

fn bg_color() -> Color {
    Color::WHITE
}

/// Parses `#rrggbb` or `#rgb`. Anything else paints black.
pub fn parse_hex_color(value: &str) -> Color {
    value
        .strip_prefix('#')
        .filter(|hex| hex.is_ascii())
        .and_then(hex_rgb)
        .map(|(r, g, b)| Color::from_rgba8(r, g, b, 255))
        .unwrap_or(Color::BLACK)
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => Some((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => None,
    }
}

/// Paints into a [`Pixmap`] through the view transform.
pub struct PixmapSink<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
}

impl<'a> PixmapSink<'a> {
    pub fn new(pixmap: &'a mut Pixmap, viewport: &Viewport) -> Self {
        let t = viewport.transform();
        let transform = Transform::from_scale(t.scale as f32, t.scale as f32)
            .post_translate(t.pan_x as f32, t.pan_y as f32);
        Self { pixmap, transform }
    }
}

fn polyline_path(points: &[Point], closed: bool, smooth: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);

    if smooth && points.len() > 2 {
        // Quadratic segments through the midpoints, each vertex as control.
        for pair in points[1..].windows(2) {
            let (ctrl, next) = (pair[0], pair[1]);
            let mid_x = (ctrl.x + next.x) / 2.0;
            let mid_y = (ctrl.y + next.y) / 2.0;
            pb.quad_to(ctrl.x as f32, ctrl.y as f32, mid_x as f32, mid_y as f32);
        }
        if let Some(last) = points.last() {
            pb.line_to(last.x as f32, last.y as f32);
        }
    } else {
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

impl RenderSink for PixmapSink<'_> {
    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle, closed: bool, smooth: bool) {
        if points.len() < 2 {
            return;
        }
        let Some(path) = polyline_path(points, closed, smooth) else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;

        if let Some(fill) = style.fill.as_deref() {
            paint.set_color(parse_hex_color(fill));
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, self.transform, None);
        }

        paint.set_color(parse_hex_color(&style.color));
        let stroke = Stroke {
            width: style.width as f32,
            dash: style
                .dash
                .and_then(|(on, off)| StrokeDash::new(vec![on as f32, off as f32], 0.0)),
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.transform, None);
    }

    fn draw_marker(&mut self, center: Point, radius: f64, color: &str) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(parse_hex_color(color));
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, self.transform, None);
    }
}

/// Renders the pattern and overlay to an RGB image the size of the viewport.
pub fn render_to_image(state: &PatternState, overlay: &Overlay<'_>, viewport: &Viewport) -> RgbImage {
    let (w, h) = viewport.size();
    let width = w.max(1.0) as u32;
    let height = h.max(1.0) as u32;

    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(bg_color());

    let far_corner = viewport.device_to_model(w, h);
    {
        let mut sink = PixmapSink::new(&mut pixmap, viewport);
        render_pattern(state, overlay, (far_corner.x, far_corner.y), &mut sink);
    }

    // Opaque background, so the premultiplied channels are the colour.
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
