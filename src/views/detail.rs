//! Detail view: back button, attribute panel, elevation bar

use egui::Color32;

use super::{gradient_color, rgb, Canvas, ACCENT};
use crate::config::TextConfig;
use crate::dataset::VolcanoRecord;
use crate::geometry::{
    elevation_to_color, lerp, map_range, Layout, Point, MAX_ELEVATION, MIN_ELEVATION,
};

const GUIDE_WIDTH: f32 = 3.0;

/// Vertical elevation gradient, +7000 m at the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ElevationBar {
    pub fn new(canvas_width: f64) -> Self {
        Self {
            x: canvas_width - 300.0,
            y: 150.0,
            width: 60.0,
            height: 500.0,
        }
    }

    pub fn zero_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn bottom_y(&self) -> f64 {
        self.y + self.height
    }

    /// Row the pointer sits on for `elevation`
    pub fn pointer_y(&self, elevation: f64) -> f64 {
        map_range(elevation, MIN_ELEVATION, MAX_ELEVATION, self.bottom_y(), self.y)
    }

    /// Gradient color of each pixel row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = (f64, (f64, f64, f64))> + '_ {
        let rows = self.height as usize;
        (0..rows).map(move |i| {
            let t = i as f64 / self.height;
            (self.y + i as f64, (lerp(240.0, 50.0, t), 0.0, lerp(50.0, 240.0, t)))
        })
    }

    /// Apex, then the base corners on the zero row, clockwise on screen.
    /// Below sea level the apex hangs under the base, so the corners swap.
    pub fn pointer_triangle(&self, elevation: f64) -> [Point; 3] {
        let apex = Point::new(self.x - 120.0, self.pointer_y(elevation));
        let half_base = 50.0;
        let right = Point::new(apex.x + half_base, self.zero_y());
        let left = Point::new(apex.x - half_base, self.zero_y());
        if apex.y <= self.zero_y() {
            [apex, right, left]
        } else {
            [apex, left, right]
        }
    }
}

/// Attribute block; leading blank line keeps it clear of the title
pub fn detail_text(v: &VolcanoRecord) -> String {
    format!(
        "\nLocation: {} ({})\nElevation: {} m\nType: {}\nCategory: {}\nStatus: {}\n\
         Last known eruption: {}\nLatitude: {}\nLongitude: {}",
        v.location,
        v.country,
        v.elevation,
        v.kind,
        v.category,
        v.status,
        v.last_eruption,
        v.latitude,
        v.longitude
    )
}

/// Draws nothing when the selection doesn't resolve
pub fn draw(canvas: &Canvas, selected: Option<&VolcanoRecord>, layout: &Layout, text: &TextConfig) {
    let Some(v) = selected else {
        return;
    };

    canvas.text(Point::new(50.0, 50.0), &text.back_label, 18.0, Color32::WHITE);
    draw_detail_text(canvas, v);
    draw_elevation_bar(canvas, v, &ElevationBar::new(layout.canvas_width));
}

fn draw_detail_text(canvas: &Canvas, v: &VolcanoRecord) {
    canvas.text(Point::new(200.0, 170.0), &v.name, 50.0, ACCENT);
    let body = detail_text(v);
    canvas.text_block(Point::new(200.0, 300.0), &body, 24.0, Color32::WHITE, f32::INFINITY);
}

fn draw_elevation_bar(canvas: &Canvas, v: &VolcanoRecord, bar: &ElevationBar) {
    for (y, color) in bar.rows() {
        canvas.line(
            Point::new(bar.x, y),
            Point::new(bar.x + bar.width, y),
            1.0,
            gradient_color(color),
        );
    }

    let pos = bar.pointer_y(v.elevation);
    let bar_color = gradient_color(elevation_to_color(v.elevation));

    let label_x = bar.x - 300.0;
    canvas.text(Point::new(label_x, bar.y), "+7000 m", 18.0, Color32::WHITE);
    canvas.text(Point::new(label_x, bar.bottom_y()), "-7000 m", 18.0, Color32::WHITE);
    canvas.text(Point::new(label_x, bar.zero_y()), "0m", 18.0, Color32::WHITE);

    let triangle = bar.pointer_triangle(v.elevation);
    canvas.triangle(triangle, rgb(v.last_eruption.color()));

    canvas.line(Point::new(bar.x, pos), triangle[0], GUIDE_WIDTH, bar_color);

    for y in [bar.y, bar.bottom_y(), bar.zero_y()] {
        canvas.line(
            Point::new(bar.x + bar.width, y),
            Point::new(bar.x - 200.0, y),
            GUIDE_WIDTH,
            Color32::WHITE,
        );
    }

    canvas.text(
        Point::new(bar.x - 100.0, pos - 10.0),
        &format!("{} m", v.elevation),
        20.0,
        bar_color,
    );
}
