//! Drives all running zoom transitions

use crate::math::FRAME_STYLE;
use crate::surface::{palette, Surface};
use crate::types::WindowId;

use super::{ZoomDirection, ZoomTransition};

/// Set of in-flight transitions, at most one per window
#[derive(Debug, Default)]
pub struct TransitionAnimator {
    running: Vec<ZoomTransition>,
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition; refused if the window is already animating
    pub fn start(&mut self, transition: ZoomTransition) -> bool {
        if self.is_animating(transition.window()) {
            return false;
        }
        tracing::debug!(
            window = transition.window(),
            direction = ?transition.direction(),
            "zoom started"
        );
        self.running.push(transition);
        true
    }

    pub fn is_animating(&self, window: WindowId) -> bool {
        self.running.iter().any(|t| t.window() == window)
    }

    /// Whether any transition is running
    pub fn is_active(&self) -> bool {
        !self.running.is_empty()
    }

    pub fn running(&self) -> &[ZoomTransition] {
        &self.running
    }

    /// Advance every transition one step. Returns the transitions that
    /// reached their last step this tick, in start order; they are no
    /// longer running.
    pub fn tick(&mut self) -> Vec<(WindowId, ZoomDirection)> {
        let mut finished = Vec::new();
        self.running.retain_mut(|t| match t.next() {
            Some(frame) if frame.is_last() => {
                finished.push((t.window(), t.direction()));
                false
            }
            Some(_) => true,
            None => {
                finished.push((t.window(), t.direction()));
                false
            }
        });
        tracing::trace!(running = self.running.len(), finished = finished.len(), "zoom tick");
        finished
    }

    /// Draw the dashed outline of every running transition
    pub fn draw(&self, surface: &mut Surface) {
        for t in &self.running {
            surface.stroke_rect_dashed(t.current().rect, palette::BLACK, FRAME_STYLE.dash);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Rect};
    use crate::surface::SurfaceSize;
    use crate::transition::TRANSITION_STEPS;

    fn open(window: WindowId) -> ZoomTransition {
        ZoomTransition::open(window, Rect::new(100, 100, 200, 150), Point::new(320, 240))
    }

    #[test]
    fn test_duplicate_start_is_refused() {
        let mut animator = TransitionAnimator::new();
        assert!(animator.start(open(1)));
        assert!(!animator.start(open(1)));
        assert_eq!(animator.running().len(), 1);
    }

    #[test]
    fn test_finishes_on_eighth_tick() {
        let mut animator = TransitionAnimator::new();
        animator.start(open(1));

        for _ in 0..TRANSITION_STEPS - 1 {
            assert!(animator.tick().is_empty());
            assert!(animator.is_animating(1));
        }
        assert_eq!(animator.tick(), vec![(1, ZoomDirection::Open)]);
        assert!(!animator.is_active());
    }

    #[test]
    fn test_concurrent_transitions_are_independent() {
        let mut animator = TransitionAnimator::new();
        animator.start(open(1));
        for _ in 0..3 {
            animator.tick();
        }
        animator.start(open(2));

        let mut done = Vec::new();
        for _ in 0..TRANSITION_STEPS {
            done.extend(animator.tick());
        }
        assert_eq!(done, vec![(1, ZoomDirection::Open), (2, ZoomDirection::Open)]);
    }

    #[test]
    fn test_draw_outline_of_running_transition() {
        let mut animator = TransitionAnimator::new();
        let target = Rect::new(100, 100, 200, 150);
        animator.start(ZoomTransition::close(1, target, Point::new(320, 240)));

        let mut surface = Surface::new(SurfaceSize::VGA).unwrap();
        animator.draw(&mut surface);

        // Step 0 of a close is the full window outline; the dash starts at the corner
        assert_eq!(surface.pixel(100, 100), Some(palette::BLACK));
        assert_eq!(surface.pixel(150, 150), Some(Default::default()));
    }
}
