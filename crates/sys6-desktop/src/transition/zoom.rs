//! Fixed-step zoom rectangle animation

use crate::math::{Point, Rect};
use crate::types::WindowId;

/// Number of frames in an open or close zoom
pub const TRANSITION_STEPS: u32 = 8;

/// Which way the zoom runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Grows from the anchor to the window bounds
    Open,
    /// Shrinks from the window bounds to the anchor
    Close,
}

/// One frame of a zoom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomFrame {
    pub step: u32,
    pub rect: Rect,
}

impl ZoomFrame {
    /// Whether this is the final frame
    pub fn is_last(&self) -> bool {
        self.step >= TRANSITION_STEPS
    }
}

/// Zoom animation for one window, anchored at a fixed point
///
/// Starts at step 0; each call to `next` advances one step and yields that
/// frame, ending after step [`TRANSITION_STEPS`]. There is no cancellation.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTransition {
    window: WindowId,
    direction: ZoomDirection,
    anchor: Point,
    target: Rect,
    step: u32,
}

impl ZoomTransition {
    /// Zoom in from `anchor` to `target`
    pub fn open(window: WindowId, target: Rect, anchor: Point) -> Self {
        Self::new(window, ZoomDirection::Open, target, anchor)
    }

    /// Zoom out from `target` to `anchor`
    pub fn close(window: WindowId, target: Rect, anchor: Point) -> Self {
        Self::new(window, ZoomDirection::Close, target, anchor)
    }

    fn new(window: WindowId, direction: ZoomDirection, target: Rect, anchor: Point) -> Self {
        Self {
            window,
            direction,
            anchor,
            target,
            step: 0,
        }
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn direction(&self) -> ZoomDirection {
        self.direction
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step >= TRANSITION_STEPS
    }

    /// Fraction of the window bounds covered at `step`
    pub fn progress_at(&self, step: u32) -> f32 {
        let t = step.min(TRANSITION_STEPS) as f32 / TRANSITION_STEPS as f32;
        match self.direction {
            ZoomDirection::Open => t,
            ZoomDirection::Close => 1.0 - t,
        }
    }

    /// Outline rectangle at `step`
    pub fn rect_at(&self, step: u32) -> Rect {
        let collapsed = Rect::new(self.anchor.x, self.anchor.y, 0, 0);
        Rect::lerp(&collapsed, &self.target, self.progress_at(step))
    }

    /// Frame for the current step
    pub fn current(&self) -> ZoomFrame {
        ZoomFrame {
            step: self.step,
            rect: self.rect_at(self.step),
        }
    }
}

impl Iterator for ZoomTransition {
    type Item = ZoomFrame;

    fn next(&mut self) -> Option<ZoomFrame> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (TRANSITION_STEPS - self.step.min(TRANSITION_STEPS)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZoomTransition {}
