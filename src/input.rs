//! Input dispatcher
//!
//! Pointer presses are the only thing that changes the view.

use crate::geometry::Point;
use crate::state::{AppState, View};

/// Back-to-map hit area on the detail view (exclusive bounds)
pub const BACK_BUTTON_MIN: Point = Point::new(30.0, 40.0);
pub const BACK_BUTTON_MAX: Point = Point::new(250.0, 90.0);

/// Outcome of a press, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Selected(usize),
    Returned,
    Unchanged,
}

pub fn in_back_button(p: Point) -> bool {
    let inside_x = p.x > BACK_BUTTON_MIN.x && p.x < BACK_BUTTON_MAX.x;
    let inside_y = p.y > BACK_BUTTON_MIN.y && p.y < BACK_BUTTON_MAX.y;
    inside_x && inside_y
}

/// Apply a primary-button press at `pointer` (canvas coordinates)
pub fn handle_press(state: &mut AppState, pointer: Point) -> Transition {
    match state.view {
        View::Map => match state.hit_test(pointer) {
            Some(selected) => {
                state.view = View::Detail { selected };
                Transition::Selected(selected)
            }
            None => Transition::Unchanged,
        },
        View::Detail { .. } => {
            if in_back_button(pointer) {
                state.view = View::Map;
                Transition::Returned
            } else {
                Transition::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::record;

    fn state() -> AppState {
        AppState::new(vec![
            record("First", 400.0, 400.0, 0.0),
            record("Second", 403.0, 400.0, 0.0),
            record("Far", 900.0, 600.0, 0.0),
        ])
    }

    #[test]
    fn test_press_on_marker_opens_detail() {
        let mut s = state();
        assert_eq!(handle_press(&mut s, Point::new(901.0, 601.0)), Transition::Selected(2));
        assert_eq!(s.view, View::Detail { selected: 2 });
        assert_eq!(s.selected().unwrap().name, "Far");
    }

    #[test]
    fn test_overlap_selects_earlier_record() {
        let mut s = state();
        let pointer = Point::new(401.5, 400.0);
        handle_press(&mut s, pointer);
        assert_eq!(s.selected().unwrap().name, "First");
    }

    #[test]
    fn test_miss_on_map_is_noop() {
        let mut s = state();
        assert_eq!(handle_press(&mut s, Point::new(10.0, 10.0)), Transition::Unchanged);
        assert_eq!(s.view, View::Map);
    }

    #[test]
    fn test_back_button_returns_to_map() {
        for selected in 0..3 {
            let mut s = state();
            s.view = View::Detail { selected };
            assert_eq!(handle_press(&mut s, Point::new(100.0, 60.0)), Transition::Returned);
            assert_eq!(s.view, View::Map);
            assert!(s.selected().is_none());
        }
    }

    #[test]
    fn test_other_press_in_detail_is_noop() {
        let mut s = state();
        s.view = View::Detail { selected: 1 };
        // Pressing where a marker sits on the map does not reselect
        assert_eq!(handle_press(&mut s, Point::new(400.0, 400.0)), Transition::Unchanged);
        assert_eq!(s.view, View::Detail { selected: 1 });
    }

    #[test]
    fn test_back_button_bounds_are_exclusive() {
        assert!(!in_back_button(Point::new(30.0, 60.0)));
        assert!(!in_back_button(Point::new(250.0, 60.0)));
        assert!(!in_back_button(Point::new(100.0, 40.0)));
        assert!(!in_back_button(Point::new(100.0, 90.0)));
        assert!(in_back_button(Point::new(31.0, 41.0)));
        assert!(in_back_button(Point::new(249.0, 89.0)));
    }
}
