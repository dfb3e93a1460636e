//! Pointer-down hit testing

use crate::math::Point;
use crate::types::WindowId;
use crate::window::{WindowRegion, WindowStack};

use super::InteractionState;

/// Outcome of a pointer event, reported to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The event changed state or was absorbed by a window
    Handled,
    /// Nothing was under the pointer, or no gesture was in progress
    Unhandled,
    /// A close or dismiss was refused because the interaction lock is held
    Suppressed,
}

/// What a pointer-down asks the manager to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// No window under the pointer
    None,
    /// The pointer landed on a window (or under a modal) with no control
    /// there; the event stops here
    Absorbed(WindowId),
    BeginDrag { window: WindowId, offset: Point },
    BeginResize { window: WindowId },
    BeginScroll { window: WindowId, grab_offset: i32 },
    Close(WindowId),
    Dismiss(WindowId),
}

/// Routes pointer input and tracks the gesture in progress
#[derive(Debug, Default)]
pub struct InputRouter {
    state: InteractionState,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a pointer-down against the stack.
    ///
    /// Interactive windows are tested topmost first. The first window that
    /// contains the point receives the event and no window below it is
    /// considered. An open modal window also stops the search when the point
    /// misses it, so nothing beneath a modal can be reached.
    pub fn route(stack: &WindowStack, p: Point) -> Intent {
        for window in stack.front_to_back_open() {
            let Some(region) = window.region_at(p) else {
                if window.is_modal() {
                    return Intent::Absorbed(window.id);
                }
                continue;
            };

            let id = window.id;
            return match region {
                WindowRegion::DismissButton => Intent::Dismiss(id),
                WindowRegion::ResizeHandle => Intent::BeginResize { window: id },
                WindowRegion::CloseBox => Intent::Close(id),
                WindowRegion::TitleBar if window.is_modal() => Intent::Absorbed(id),
                WindowRegion::TitleBar => Intent::BeginDrag {
                    window: id,
                    offset: p - window.position(),
                },
                WindowRegion::ScrollTrack | WindowRegion::ScrollThumb => Intent::BeginScroll {
                    window: id,
                    grab_offset: p.y.saturating_sub(window.scroll_y()),
                },
                WindowRegion::Content => Intent::Absorbed(id),
            };
        }
        Intent::None
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    pub(crate) fn begin(&mut self, state: InteractionState) {
        self.state = state;
    }

    /// Leave the current gesture and return it
    pub(crate) fn end(&mut self) -> InteractionState {
        std::mem::take(&mut self.state)
    }
}
