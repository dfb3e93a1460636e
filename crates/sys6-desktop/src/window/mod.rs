//! Window module
//!
//! Provides the window value type, its chrome regions and hit testing, and
//! the arena-backed stack that holds windows in z-order.

mod config;
mod region;
mod stack;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use region::WindowRegion;
pub use stack::{Lifecycle, WindowStack};
pub use window::{Gesture, Window};

pub use crate::types::WindowId;
