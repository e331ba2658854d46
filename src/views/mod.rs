//! Renderers for the two views
//!
//! Layout is computed in canvas coordinates ([`Point`]); [`Canvas`] maps
//! those onto the egui painter, offset by wherever the scroll area put
//! the canvas this frame.

pub mod detail;
pub mod map;

use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::geometry::Point;

/// Heading/title accent
pub const ACCENT: Color32 = Color32::from_rgb(0xf7, 0x86, 0x52);

pub fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Saturating conversion of an unclamped gradient value
pub fn gradient_color((r, g, b): (f64, f64, f64)) -> Color32 {
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

/// Painter plus the screen position of the canvas origin
pub struct Canvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> Canvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    pub fn to_screen(&self, p: Point) -> Pos2 {
        Pos2::new(self.origin.x + p.x as f32, self.origin.y + p.y as f32)
    }

    pub fn to_local(&self, p: Pos2) -> Point {
        Point::new((p.x - self.origin.x) as f64, (p.y - self.origin.y) as f64)
    }

    pub fn rect(&self, min: Point, width: f64, height: f64) -> egui::Rect {
        egui::Rect::from_min_size(self.to_screen(min), egui::vec2(width as f32, height as f32))
    }

    pub fn image(
        &self,
        texture: &egui::TextureHandle,
        min: Point,
        width: f64,
        height: f64,
        tint: Color32,
    ) {
        let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        self.painter.image(texture.id(), self.rect(min, width, height), uv, tint);
    }

    pub fn triangle(&self, vertices: [Point; 3], fill: Color32) {
        let points = vertices.iter().map(|&v| self.to_screen(v)).collect();
        self.painter.add(egui::Shape::convex_polygon(points, fill, Stroke::NONE));
    }

    pub fn line(&self, from: Point, to: Point, width: f32, color: Color32) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], Stroke::new(width, color));
    }

    pub fn rounded_rect(&self, min: Point, width: f64, height: f64, rounding: f32, fill: Color32) {
        self.painter.rect_filled(self.rect(min, width, height), rounding, fill);
    }

    /// Text with its baseline-left corner at `at`
    pub fn text(&self, at: Point, text: &str, size: f32, color: Color32) {
        self.text_aligned(at, Align2::LEFT_BOTTOM, text, size, color);
    }

    pub fn text_aligned(&self, at: Point, align: Align2, text: &str, size: f32, color: Color32) {
        if text.is_empty() {
            return;
        }
        self.painter
            .text(self.to_screen(at), align, text, FontId::proportional(size), color);
    }

    /// Multi-line or wrapped text with its top-left corner at `at`
    pub fn text_block(&self, at: Point, text: &str, size: f32, color: Color32, wrap_width: f32) {
        if text.is_empty() {
            return;
        }
        let galley = self
            .painter
            .layout(text.to_string(), FontId::proportional(size), color, wrap_width);
        self.painter.galley(self.to_screen(at), galley, color);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Positive shoelace area in y-down coordinates means clockwise on screen
    pub(crate) fn is_clockwise(vertices: &[Point; 3]) -> bool {
        let area: f64 = (0..3)
            .map(|i| {
                let (a, b) = (vertices[i], vertices[(i + 1) % 3]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        area > 0.0
    }

    #[test]
    fn test_clockwise_helper() {
        let cw = [Point::new(0.0, -1.0), Point::new(1.0, 1.0), Point::new(-1.0, 1.0)];
        let ccw = [cw[0], cw[2], cw[1]];
        assert!(is_clockwise(&cw));
        assert!(!is_clockwise(&ccw));
    }

    #[test]
    fn test_gradient_color_saturates() {
        assert_eq!(gradient_color((50.0, 0.0, 240.0)), Color32::from_rgb(50, 0, 240));
        assert_eq!(gradient_color((-20.0, 0.0, 300.0)), Color32::from_rgb(0, 0, 255));
        assert_eq!(gradient_color((144.6, 0.0, 145.4)), Color32::from_rgb(145, 0, 145));
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb([0xff, 0x66, 0x00]), Color32::from_rgb(255, 102, 0));
    }
}
