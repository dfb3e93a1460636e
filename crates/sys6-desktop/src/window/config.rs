//! Window creation parameters

use serde::{Deserialize, Serialize};

use crate::math::Rect;

/// Parameters for opening a window
///
/// Undersized geometry is accepted and silently raised to the minimum window
/// size when the window is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// Modal windows have no close box, cannot be dragged or resized, and
    /// carry a dismiss button instead.
    pub modal: bool,
    pub has_scroll: bool,
    /// Scroll thumb height; `None` uses the manager default
    pub thumb_height: Option<i32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 200,
            height: 150,
            title: String::new(),
            modal: false,
            has_scroll: true,
            thumb_height: None,
        }
    }
}

impl WindowConfig {
    /// A plain document window
    pub fn new(bounds: Rect, title: impl Into<String>) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            title: title.into(),
            ..Default::default()
        }
    }

    /// A modal alert
    pub fn modal(bounds: Rect, title: impl Into<String>) -> Self {
        Self {
            modal: true,
            ..Self::new(bounds, title)
        }
    }

    /// Builder: toggle the scroll track
    pub fn with_scroll(mut self, has_scroll: bool) -> Self {
        self.has_scroll = has_scroll;
        self
    }

    /// Builder: fixed thumb height
    pub fn with_thumb_height(mut self, height: i32) -> Self {
        self.thumb_height = Some(height);
        self
    }

    /// Requested bounds before minimum-size clamping
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
