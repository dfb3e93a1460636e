//! Window manager: the single context object for the desktop
//!
//! Owns the surface, the window stack, the input router and the transition
//! animator. Every pointer handler and every `tick_frame` call takes
//! `&mut self`; nothing else mutates desktop state.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::host::{CloseReason, HostCommand, HostEvent, MAX_PENDING_EVENTS};
use crate::input::{resize_candidate, InputResult, InputRouter, Intent, InteractionState};
use crate::math::{Point, FRAME_STYLE};
use crate::surface::{palette, Surface};
use crate::transition::{TransitionAnimator, ZoomDirection, ZoomTransition};
use crate::types::WindowId;
use crate::window::{Gesture, Lifecycle, Window, WindowConfig, WindowStack};

/// Desktop state and entry points for the host
#[derive(Debug)]
pub struct WindowManager {
    config: DesktopConfig,
    surface: Surface,
    stack: WindowStack,
    input: InputRouter,
    animator: TransitionAnimator,
    /// Why each closing window is closing, reported when it is released
    closing: HashMap<WindowId, CloseReason>,
    interaction_locked: bool,
    /// Undrained host events, oldest first, at most `MAX_PENDING_EVENTS`
    events: VecDeque<HostEvent>,
}

impl WindowManager {
    /// Create a manager and paint the empty desktop
    pub fn new(config: DesktopConfig) -> DesktopResult<Self> {
        let surface = Surface::new(config.surface)?;
        let mut manager = Self {
            config,
            surface,
            stack: WindowStack::new(),
            input: InputRouter::new(),
            animator: TransitionAnimator::new(),
            closing: HashMap::new(),
            interaction_locked: false,
            events: VecDeque::new(),
        };
        manager.redraw();
        Ok(manager)
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn stack(&self) -> &WindowStack {
        &self.stack
    }

    /// Look up a window in any lifecycle state
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.stack.get(id)
    }

    /// Windows in the z-order, back-to-front
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.stack.back_to_front()
    }

    pub fn lifecycle(&self, id: WindowId) -> Option<Lifecycle> {
        self.stack.lifecycle(id)
    }

    /// Whether any transition is running
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Gesture in progress
    pub fn interaction(&self) -> &InteractionState {
        self.input.state()
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// Create a window and start its zoom-in.
    ///
    /// The window is stored immediately but joins the z-order only once the
    /// transition completes, so it cannot be hit before then.
    pub fn open_window(&mut self, config: WindowConfig) -> WindowId {
        let id = self.stack.insert(&config, self.config.thumb_height);
        let target = self
            .stack
            .get(id)
            .map(Window::rect)
            .unwrap_or_else(|| config.bounds());
        self.animator
            .start(ZoomTransition::open(id, target, self.surface.center()));
        debug!(window = id, title = %config.title, modal = config.modal, "opening window");
        self.redraw();
        id
    }

    /// Start the zoom-out for a window.
    ///
    /// A window that is already opening or closing is left alone.
    pub fn close_window(&mut self, id: WindowId) -> DesktopResult<()> {
        if !self.stack.contains(id) {
            return Err(DesktopError::WindowNotFound(id));
        }
        self.begin_close(id, CloseReason::Host);
        Ok(())
    }

    fn begin_close(&mut self, id: WindowId, reason: CloseReason) -> bool {
        if self.input.state().window() == Some(id) {
            self.cancel_gesture();
        }
        if !self.stack.begin_close(id) {
            debug!(window = id, "close ignored, window is animating");
            return false;
        }
        let target = match self.stack.get(id) {
            Some(window) => window.rect(),
            None => return false,
        };
        self.animator
            .start(ZoomTransition::close(id, target, self.surface.center()));
        self.closing.insert(id, reason);
        debug!(window = id, ?reason, "closing window");
        self.redraw();
        true
    }

    /// Hold or release the interaction lock.
    ///
    /// While held, clicks on close boxes and dismiss buttons are refused.
    pub fn set_interaction_locked(&mut self, locked: bool) {
        if self.interaction_locked != locked {
            debug!(locked, "interaction lock changed");
        }
        self.interaction_locked = locked;
    }

    pub fn is_interaction_locked(&self) -> bool {
        self.interaction_locked
    }

    /// Tell a window how tall its content is, deriving its thumb height
    pub fn set_content_height(&mut self, id: WindowId, height: i32) -> DesktopResult<()> {
        if !self.stack.contains(id) {
            return Err(DesktopError::WindowNotFound(id));
        }
        let window = self
            .stack
            .get_open_mut(id)
            .ok_or_else(|| DesktopError::InvalidOperation {
                op: "set_content_height",
                reason: "window is animating",
            })?;
        window.set_content_height(height);
        self.redraw();
        Ok(())
    }

    /// Apply a command from the host.
    ///
    /// Returns the new window's ID for `OpenWindow`.
    pub fn apply(&mut self, command: HostCommand) -> DesktopResult<Option<WindowId>> {
        match command {
            HostCommand::OpenWindow(config) => Ok(Some(self.open_window(config))),
            HostCommand::CloseWindow { window } => {
                self.close_window(window)?;
                Ok(None)
            }
            HostCommand::SetInteractionLock { locked } => {
                self.set_interaction_locked(locked);
                Ok(None)
            }
        }
    }

    /// Take the events queued since the last call.
    ///
    /// Hosts should drain once per frame. Only the newest
    /// `MAX_PENDING_EVENTS` are kept; older ones are dropped.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: HostEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            if let Some(dropped) = self.events.pop_front() {
                warn!(?dropped, "host event queue full, dropping oldest");
            }
        }
        self.events.push_back(event);
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    pub fn handle_pointer_down(&mut self, x: i32, y: i32) -> InputResult {
        let p = Point::new(x, y);

        // A press without a matching release drops the stale gesture
        if !self.input.state().is_idle() {
            self.cancel_gesture();
        }

        let result = match InputRouter::route(&self.stack, p) {
            Intent::None => InputResult::Unhandled,
            Intent::Absorbed(_) => InputResult::Handled,
            Intent::Close(id) | Intent::Dismiss(id) if self.interaction_locked => {
                debug!(window = id, "close suppressed by interaction lock");
                InputResult::Suppressed
            }
            Intent::Close(id) => {
                self.begin_close(id, CloseReason::CloseBox);
                InputResult::Handled
            }
            Intent::Dismiss(id) => {
                self.begin_close(id, CloseReason::Dismissed);
                InputResult::Handled
            }
            Intent::BeginDrag { window, offset } => {
                let candidate = p - offset;
                self.begin_gesture(InteractionState::Dragging {
                    window,
                    offset,
                    candidate,
                })
            }
            Intent::BeginResize { window } => match self.stack.get(window) {
                Some(w) => {
                    let original = w.rect();
                    self.begin_gesture(InteractionState::Resizing {
                        window,
                        original,
                        candidate: original.size(),
                    })
                }
                None => InputResult::Unhandled,
            },
            Intent::BeginScroll {
                window,
                grab_offset,
            } => self.begin_gesture(InteractionState::ScrollDragging {
                window,
                grab_offset,
            }),
        };

        if result == InputResult::Handled {
            self.redraw();
        }
        result
    }

    /// Handle pointer move event
    pub fn handle_pointer_move(&mut self, x: i32, y: i32) -> InputResult {
        let tracking = self.track(Point::new(x, y));
        self.redraw();
        if tracking {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer up event
    pub fn handle_pointer_up(&mut self, x: i32, y: i32) -> InputResult {
        if !self.track(Point::new(x, y)) {
            return InputResult::Unhandled;
        }

        let state = self.input.end();
        if let Some(id) = state.window() {
            if let Some(window) = self.stack.get_open_mut(id) {
                match state {
                    InteractionState::Dragging { candidate, .. } => {
                        window.move_to(candidate);
                        debug!(window = id, x = candidate.x, y = candidate.y, "drag committed");
                    }
                    InteractionState::Resizing { candidate, .. } => {
                        window.resize_to(candidate);
                        debug!(
                            window = id,
                            width = candidate.width,
                            height = candidate.height,
                            "resize committed"
                        );
                    }
                    InteractionState::ScrollDragging { .. } | InteractionState::Idle => {}
                }
                window.set_gesture(Gesture::Idle);
            }
        }
        self.redraw();
        InputResult::Handled
    }

    fn begin_gesture(&mut self, state: InteractionState) -> InputResult {
        let Some(id) = state.window() else {
            return InputResult::Unhandled;
        };
        let Some(window) = self.stack.get_open_mut(id) else {
            return InputResult::Unhandled;
        };
        window.set_gesture(state.gesture());
        debug!(window = id, gesture = ?state.gesture(), "gesture started");
        self.input.begin(state);
        InputResult::Handled
    }

    /// Drop the gesture in progress without committing it
    fn cancel_gesture(&mut self) {
        let state = self.input.end();
        if let Some(id) = state.window() {
            if let Some(window) = self.stack.get_open_mut(id) {
                window.set_gesture(Gesture::Idle);
            }
            debug!(window = id, "gesture cancelled");
        }
    }

    /// Follow the pointer with the gesture in progress.
    ///
    /// Drag and resize update their pending candidate; scroll writes through
    /// to the window. Returns false when no gesture is active.
    fn track(&mut self, p: Point) -> bool {
        match self.input.state_mut() {
            InteractionState::Idle => false,
            InteractionState::Dragging {
                offset, candidate, ..
            } => {
                *candidate = (p - *offset).confine();
                true
            }
            InteractionState::Resizing {
                original,
                candidate,
                ..
            } => {
                *candidate = resize_candidate(original.position(), p);
                true
            }
            InteractionState::ScrollDragging {
                window,
                grab_offset,
            } => {
                let (id, value) = (*window, p.y.saturating_sub(*grab_offset));
                if let Some(window) = self.stack.get_open_mut(id) {
                    window.set_scroll_y(value);
                }
                true
            }
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance every running transition by one step.
    ///
    /// Completed zoom-ins join the z-order; completed zoom-outs are removed.
    /// Returns whether any transition is still running.
    pub fn tick_frame(&mut self) -> bool {
        if !self.animator.is_active() {
            return false;
        }

        for (id, direction) in self.animator.tick() {
            match direction {
                ZoomDirection::Open => {
                    if self.stack.attach(id) {
                        debug!(window = id, "window opened");
                        self.push_event(HostEvent::WindowOpened { window: id });
                    }
                }
                ZoomDirection::Close => {
                    if self.stack.release(id).is_some() {
                        let reason = self.closing.remove(&id).unwrap_or(CloseReason::Host);
                        debug!(window = id, ?reason, "window closed");
                        self.push_event(HostEvent::WindowClosed { window: id, reason });
                    }
                }
            }
        }

        self.redraw();
        self.animator.is_active()
    }

    /// Repaint the whole surface.
    ///
    /// Windows are painted back-to-front, then transition outlines, then the
    /// dashed preview of a drag or resize in progress.
    pub fn redraw(&mut self) {
        self.surface.clear(self.config.background);
        for window in self.stack.back_to_front() {
            window.draw(&mut self.surface);
        }
        self.animator.draw(&mut self.surface);

        let state = self.input.state();
        let preview = state
            .window()
            .and_then(|id| self.stack.get(id))
            .and_then(|window| state.preview_rect(window.rect()));
        if let Some(rect) = preview {
            self.surface
                .stroke_rect_dashed(rect, palette::BLACK, FRAME_STYLE.dash);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::math::Rect;
    use crate::transition::TRANSITION_STEPS;
    use proptest::prelude::*;

    fn open_one() -> (WindowManager, WindowId) {
        let mut wm = WindowManager::new(DesktopConfig::default()).unwrap();
        let id = wm.open_window(WindowConfig::new(Rect::new(100, 100, 200, 150), "W"));
        for _ in 0..TRANSITION_STEPS {
            wm.tick_frame();
        }
        (wm, id)
    }

    proptest! {
        #[test]
        fn resize_never_goes_below_minimum(x in -1000i32..1000, y in -1000i32..1000) {
            let (mut wm, id) = open_one();
            wm.handle_pointer_down(295, 245);
            wm.handle_pointer_move(x, y);
            wm.handle_pointer_up(x, y);

            let size = wm.window(id).unwrap().size();
            prop_assert!(size.width >= FRAME_STYLE.min_size.width);
            prop_assert!(size.height >= FRAME_STYLE.min_size.height);
        }

        #[test]
        fn scroll_stays_in_range(moves in proptest::collection::vec(-2000i32..2000, 1..20)) {
            let (mut wm, id) = open_one();
            wm.handle_pointer_down(295, 130);
            for y in moves {
                wm.handle_pointer_move(295, y);
                let window = wm.window(id).unwrap();
                prop_assert!(window.scroll_y() >= 0);
                prop_assert!(window.scroll_y() <= window.max_scroll());
            }
        }
    }
}
