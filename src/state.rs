//! Application State - single owned context
//!
//! Holds the read-only record list and the current view. Renderers borrow
//! it; only the input dispatcher mutates it.

use crate::dataset::VolcanoRecord;
use crate::geometry::Point;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Map,
    /// Index into the record list
    Detail { selected: usize },
}

#[derive(Debug)]
pub struct AppState {
    records: Vec<VolcanoRecord>,
    pub view: View,
}

impl AppState {
    pub fn new(records: Vec<VolcanoRecord>) -> Self {
        Self {
            records,
            view: View::Map,
        }
    }

    pub fn records(&self) -> &[VolcanoRecord] {
        &self.records
    }

    /// Record shown by the detail view, if the selection resolves
    pub fn selected(&self) -> Option<&VolcanoRecord> {
        match self.view {
            View::Map => None,
            View::Detail { selected } => self.records.get(selected),
        }
    }

    /// Hovered record for this frame: the last marker in list order under the pointer
    pub fn hover_candidate(&self, pointer: Point) -> Option<&VolcanoRecord> {
        self.records.iter().rev().find(|r| r.contains(pointer))
    }

    /// Index of the first marker in list order under the pointer
    pub fn hit_test(&self, pointer: Point) -> Option<usize> {
        self.records.iter().position(|r| r.contains(pointer))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::era::Era;

    pub(crate) fn record(name: &str, x: f64, y: f64, elevation: f64) -> VolcanoRecord {
        VolcanoRecord {
            name: name.to_string(),
            country: "Country".to_string(),
            location: "Location".to_string(),
            kind: "Stratovolcano".to_string(),
            category: "Stratovolcano".to_string(),
            status: "Holocene".to_string(),
            last_eruption: Era::D1,
            elevation,
            latitude: 0.0,
            longitude: 0.0,
            screen_x: x,
            screen_y: y,
        }
    }

    #[test]
    fn test_starts_on_map() {
        let state = AppState::new(vec![record("A", 0.0, 0.0, 0.0)]);
        assert_eq!(state.view, View::Map);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_hover_last_wins() {
        let state = AppState::new(vec![
            record("First", 100.0, 100.0, 0.0),
            record("Second", 102.0, 100.0, 0.0),
        ]);
        let hovered = state.hover_candidate(Point::new(101.0, 100.0)).unwrap();
        assert_eq!(hovered.name, "Second");
    }

    #[test]
    fn test_hit_test_first_wins() {
        let state = AppState::new(vec![
            record("First", 100.0, 100.0, 0.0),
            record("Second", 102.0, 100.0, 0.0),
        ]);
        assert_eq!(state.hit_test(Point::new(101.0, 100.0)), Some(0));
    }

    #[test]
    fn test_radius_is_strict_and_scales_with_elevation() {
        // size 6 at -7000m, 10 at +7000m
        let state = AppState::new(vec![
            record("Low", 0.0, 0.0, -7000.0),
            record("High", 100.0, 0.0, 7000.0),
        ]);
        assert!(state.hover_candidate(Point::new(6.0, 0.0)).is_none());
        assert!(state.hover_candidate(Point::new(5.9, 0.0)).is_some());
        assert!(state.hover_candidate(Point::new(109.9, 0.0)).is_some());
        assert!(state.hover_candidate(Point::new(110.0, 0.0)).is_none());
    }

    #[test]
    fn test_dangling_selection_resolves_to_none() {
        let mut state = AppState::new(vec![record("A", 0.0, 0.0, 0.0)]);
        state.view = View::Detail { selected: 5 };
        assert!(state.selected().is_none());
    }
}
