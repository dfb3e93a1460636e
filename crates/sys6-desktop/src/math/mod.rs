//! Core geometry types for the window toolkit
//!
//! All geometry is expressed in integer surface pixels. Rectangles are
//! half-open (`x..x + width`), which is what both the rasterizer and the
//! hit-test predicates use, so a pixel is painted for a control exactly when
//! the control's hit test accepts that pixel.

mod point;
mod rect;
mod size;
mod style;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, COORD_LIMIT, FRAME_STYLE};
