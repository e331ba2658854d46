//! Map view: background, title block, legend, markers, tooltip

use egui::{Align2, Color32};

use super::{rgb, Canvas, ACCENT};
use crate::config::TextConfig;
use crate::dataset::VolcanoRecord;
use crate::era::Era;
use crate::geometry::{Layout, Point};
use crate::state::AppState;

/// Alpha the background map is tinted with
const MAP_TINT_ALPHA: u8 = 130;

const LEGEND_RIGHT_INSET: f64 = 250.0;
const LEGEND_TOP: f64 = 300.0;
const LEGEND_SPACING: f64 = 25.0;

const TOOLTIP_WIDTH: f64 = 240.0;
const TOOLTIP_HEIGHT: f64 = 135.0;

/// Upward triangle centered on `center`, `size` above and `size / 1.5` below.
/// Clockwise on screen: apex, right, left.
pub fn marker_vertices(center: Point, size: f64) -> [Point; 3] {
    let half = size / 1.5;
    [
        center.offset(0.0, -size),
        center.offset(half, half),
        center.offset(-half, half),
    ]
}

/// One legend entry, positioned
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub era: Era,
    pub swatch: [Point; 3],
    pub label_at: Point,
}

pub fn legend_heading_at(canvas_width: f64) -> Point {
    Point::new(canvas_width - LEGEND_RIGHT_INSET, LEGEND_TOP - 45.0)
}

pub fn legend_rows(canvas_width: f64) -> Vec<LegendRow> {
    let x = canvas_width - LEGEND_RIGHT_INSET;
    Era::ALL
        .iter()
        .enumerate()
        .map(|(i, &era)| {
            let y = LEGEND_TOP + i as f64 * LEGEND_SPACING;
            LegendRow {
                era,
                swatch: [
                    Point::new(x, y),
                    Point::new(x + 10.0, y - 10.0),
                    Point::new(x + 20.0, y),
                ],
                label_at: Point::new(x + 45.0, y),
            }
        })
        .collect()
}

/// Info lines under the tooltip title
pub fn tooltip_text(v: &VolcanoRecord) -> String {
    format!(
        "Location: {} ({})\nElevation: {} m\nType: {}\nCategory: {}\nStatus: {}\n\
         Last known eruption: {}",
        v.location,
        v.country,
        v.elevation,
        v.kind,
        v.category,
        v.status,
        v.last_eruption
    )
}

pub fn draw(
    canvas: &Canvas,
    state: &AppState,
    layout: &Layout,
    map_texture: &egui::TextureHandle,
    text: &TextConfig,
    pointer: Option<Point>,
) {
    let map = &layout.map;
    canvas.image(
        map_texture,
        Point::new(map.left, map.top),
        map.width,
        map.height,
        Color32::from_white_alpha(MAP_TINT_ALPHA),
    );

    draw_title(canvas, layout, text);
    draw_legend(canvas, layout, text);

    for v in state.records() {
        let marker = marker_vertices(v.screen_pos(), v.marker_size());
        canvas.triangle(marker, rgb(v.last_eruption.color()));
    }

    let hovered = pointer.and_then(|p| state.hover_candidate(p).map(|v| (p, v)));
    if let Some((p, v)) = hovered {
        draw_tooltip(canvas, v, p);
    }
}

fn draw_title(canvas: &Canvas, layout: &Layout, text: &TextConfig) {
    canvas.text(Point::new(50.0, 50.0), &text.author, 15.0, ACCENT);
    canvas.text(Point::new(50.0, 100.0), &text.title, 30.0, ACCENT);
    canvas.text_aligned(
        Point::new(layout.canvas_width - 50.0, 50.0),
        Align2::RIGHT_BOTTOM,
        &text.credit,
        15.0,
        Color32::WHITE,
    );
    canvas.text_block(Point::new(50.0, 130.0), &text.caption, 15.0, Color32::WHITE, 500.0);
}

fn draw_legend(canvas: &Canvas, layout: &Layout, text: &TextConfig) {
    canvas.text(legend_heading_at(layout.canvas_width), &text.legend_heading, 15.0, Color32::WHITE);

    for row in legend_rows(layout.canvas_width) {
        canvas.triangle(row.swatch, rgb(row.era.color()));
        canvas.text(row.label_at, row.era.label(), 12.0, Color32::WHITE);
    }
}

fn draw_tooltip(canvas: &Canvas, v: &VolcanoRecord, pointer: Point) {
    canvas.rounded_rect(
        pointer.offset(15.0, 0.0),
        TOOLTIP_WIDTH,
        TOOLTIP_HEIGHT,
        10.0,
        Color32::from_black_alpha(200),
    );
    canvas.text_block(pointer.offset(25.0, 12.0), &v.name, 15.0, Color32::WHITE, f32::INFINITY);
    canvas.text_block(
        pointer.offset(25.0, 32.0),
        &tooltip_text(v),
        12.0,
        Color32::WHITE,
        f32::INFINITY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::record;
    use crate::views::tests::is_clockwise;

    #[test]
    fn test_marker_points_up() {
        let vertices = marker_vertices(Point::new(100.0, 100.0), 9.0);
        let [apex, right, left] = vertices;
        assert_eq!(apex, Point::new(100.0, 91.0));
        assert_eq!(right, Point::new(106.0, 106.0));
        assert_eq!(left, Point::new(94.0, 106.0));
        assert!(is_clockwise(&vertices));
    }

    #[test]
    fn test_legend_swatches_clockwise() {
        for row in legend_rows(1440.0) {
            assert!(is_clockwise(&row.swatch), "{:?}", row.era);
        }
    }

    #[test]
    fn test_legend_layout() {
        let rows = legend_rows(1440.0);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].era, Era::D1);
        assert_eq!(rows[10].era, Era::Unknown);
        assert_eq!(rows[0].swatch[0], Point::new(1190.0, 300.0));
        assert_eq!(rows[0].label_at, Point::new(1235.0, 300.0));
        for pair in rows.windows(2) {
            assert_eq!(pair[1].label_at.y - pair[0].label_at.y, 25.0);
        }
        assert_eq!(legend_heading_at(1440.0), Point::new(1190.0, 255.0));
    }

    #[test]
    fn test_tooltip_text() {
        let mut v = record("Etna", 0.0, 0.0, 3350.0);
        v.location = "Sicily".to_string();
        v.country = "Italy".to_string();
        let text = tooltip_text(&v);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Location: Sicily (Italy)");
        assert_eq!(lines[1], "Elevation: 3350 m");
        assert_eq!(lines[5], "Last known eruption: D1");
        assert_eq!(lines.len(), 6);
    }
}
