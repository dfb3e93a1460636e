//! Chrome metrics shared by drawing and hit testing

use super::Size;

/// Largest magnitude a window coordinate or dimension may take. Window
/// geometry is confined to this range so edge and area arithmetic stays well
/// inside `i32`.
pub const COORD_LIMIT: i32 = 1 << 16;

/// Frame style constants for System 6 window chrome
pub struct FrameStyle {
    pub title_bar_height: i32,
    pub close_box_inset: i32,
    pub close_box_size: i32,
    pub title_text_x: i32,
    pub title_text_y: i32,
    pub scroll_track_width: i32,
    pub scroll_thumb_height: i32,
    pub min_thumb_height: i32,
    pub resize_handle_size: i32,
    pub dismiss_button_width: i32,
    pub dismiss_button_height: i32,
    /// Distance from the window's bottom edge to the top of the dismiss button
    pub dismiss_button_bottom: i32,
    pub min_size: Size,
    /// On/off run lengths of the dashed outline used for previews and zooms
    pub dash: (u32, u32),
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 16,
    close_box_inset: 2,
    close_box_size: 8,
    title_text_x: 16,
    title_text_y: 4,
    scroll_track_width: 12,
    scroll_thumb_height: 30,
    min_thumb_height: 8,
    resize_handle_size: 12,
    dismiss_button_width: 60,
    dismiss_button_height: 20,
    dismiss_button_bottom: 30,
    min_size: Size::new(100, 50),
    dash: (4, 2),
};
