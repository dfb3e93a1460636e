//! Interaction state machine

use crate::math::{Point, Rect, Size, COORD_LIMIT, FRAME_STYLE};
use crate::types::WindowId;
use crate::window::Gesture;

/// The single gesture in progress, if any
///
/// Drag and resize keep a pending candidate that is only written to the
/// window on pointer-up; scroll writes through on every move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        window: WindowId,
        /// Pointer position relative to the window origin at press time
        offset: Point,
        /// Origin the window will take on release
        candidate: Point,
    },
    Resizing {
        window: WindowId,
        /// Geometry at press time
        original: Rect,
        /// Size the window will take on release
        candidate: Size,
    },
    ScrollDragging {
        window: WindowId,
        /// Pointer y minus `scroll_y` at press time
        grab_offset: i32,
    },
}

impl InteractionState {
    /// Window engaged in the gesture
    pub fn window(&self) -> Option<WindowId> {
        match *self {
            InteractionState::Idle => None,
            InteractionState::Dragging { window, .. }
            | InteractionState::Resizing { window, .. }
            | InteractionState::ScrollDragging { window, .. } => Some(window),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// Gesture flag mirrored onto the active window
    pub fn gesture(&self) -> Gesture {
        match self {
            InteractionState::Idle => Gesture::Idle,
            InteractionState::Dragging { .. } => Gesture::Dragging,
            InteractionState::Resizing { .. } => Gesture::Resizing,
            InteractionState::ScrollDragging { .. } => Gesture::Scrolling,
        }
    }

    /// Rectangle to preview with a dashed outline, for drag and resize
    pub fn preview_rect(&self, current: Rect) -> Option<Rect> {
        match *self {
            InteractionState::Dragging { candidate, .. } => {
                Some(Rect::from_pos_size(candidate, current.size()))
            }
            InteractionState::Resizing { candidate, .. } => {
                Some(Rect::from_pos_size(current.position(), candidate))
            }
            _ => None,
        }
    }
}

/// Size for a resize gesture: pointer minus origin, floored at the minimum
/// and capped at `COORD_LIMIT`
pub fn resize_candidate(origin: Point, pointer: Point) -> Size {
    let delta = pointer - origin;
    Size::new(delta.x.min(COORD_LIMIT), delta.y.min(COORD_LIMIT)).max(FRAME_STYLE.min_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_window() {
        let state = InteractionState::default();
        assert!(state.is_idle());
        assert_eq!(state.window(), None);
        assert_eq!(state.gesture(), Gesture::Idle);
        assert_eq!(state.preview_rect(Rect::new(0, 0, 10, 10)), None);
    }

    #[test]
    fn test_gesture_mirrors_state() {
        let drag = InteractionState::Dragging {
            window: 3,
            offset: Point::ZERO,
            candidate: Point::ZERO,
        };
        let scroll = InteractionState::ScrollDragging {
            window: 4,
            grab_offset: 0,
        };
        assert_eq!(drag.window(), Some(3));
        assert_eq!(drag.gesture(), Gesture::Dragging);
        assert_eq!(scroll.gesture(), Gesture::Scrolling);
        assert_eq!(scroll.preview_rect(Rect::new(0, 0, 10, 10)), None);
    }

    #[test]
    fn test_preview_rects() {
        let current = Rect::new(100, 100, 200, 150);
        let drag = InteractionState::Dragging {
            window: 0,
            offset: Point::new(10, 5),
            candidate: Point::new(140, 145),
        };
        assert_eq!(drag.preview_rect(current), Some(Rect::new(140, 145, 200, 150)));

        let resize = InteractionState::Resizing {
            window: 0,
            original: current,
            candidate: Size::new(250, 60),
        };
        assert_eq!(resize.preview_rect(current), Some(Rect::new(100, 100, 250, 60)));
    }

    #[test]
    fn test_resize_candidate_floor() {
        let origin = Point::new(100, 100);
        assert_eq!(resize_candidate(origin, Point::new(400, 300)), Size::new(300, 200));
        assert_eq!(resize_candidate(origin, Point::new(150, 120)), Size::new(100, 50));
        assert_eq!(resize_candidate(origin, Point::new(0, 0)), Size::new(100, 50));
        assert_eq!(
            resize_candidate(origin, Point::new(i32::MAX, i32::MAX)),
            Size::new(COORD_LIMIT, COORD_LIMIT)
        );
        assert_eq!(
            resize_candidate(origin, Point::new(i32::MIN, i32::MIN)),
            Size::new(100, 50)
        );
    }
}
