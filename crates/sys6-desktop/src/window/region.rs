//! Window chrome regions

use serde::{Deserialize, Serialize};

/// A part of a window, as seen by hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowRegion {
    /// Title bar, including the close box area
    TitleBar,
    /// Close box at the left of the title bar (non-modal only)
    CloseBox,
    /// Vertical scroll track along the right edge
    ScrollTrack,
    /// Scroll thumb inside the track
    ScrollThumb,
    /// Grow box in the bottom-right corner (non-modal only)
    ResizeHandle,
    /// `OK` button of a modal window
    DismissButton,
    /// Window body below the title bar
    Content,
}

impl WindowRegion {
    /// Every region, in paint order
    pub fn all() -> &'static [WindowRegion] {
        &[
            WindowRegion::Content,
            WindowRegion::TitleBar,
            WindowRegion::CloseBox,
            WindowRegion::ScrollTrack,
            WindowRegion::ScrollThumb,
            WindowRegion::ResizeHandle,
            WindowRegion::DismissButton,
        ]
    }

    /// Whether the region belongs to the window's chrome
    pub fn is_chrome(&self) -> bool {
        !matches!(self, WindowRegion::Content)
    }
}
