//! Open/close zoom transitions
//!
//! A transition is an iterator of [`ZoomFrame`]s, one per host frame. The
//! [`TransitionAnimator`] advances every running transition once per
//! `tick` and reports the ones that reached their last step, at which point
//! the manager attaches (open) or releases (close) the window.

mod animator;
mod zoom;

pub use animator::TransitionAnimator;
pub use zoom::{ZoomDirection, ZoomFrame, ZoomTransition, TRANSITION_STEPS};
