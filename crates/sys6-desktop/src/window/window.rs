//! The window value type: geometry, chrome, and hit testing

use crate::math::{Point, Rect, Size, COORD_LIMIT, FRAME_STYLE};
use crate::surface::{font, palette, Surface};
use crate::types::WindowId;

use super::{WindowConfig, WindowRegion};

/// Gesture a window is currently engaged in
///
/// Holding this as one enum keeps "at most one of dragging/resizing" true by
/// construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging,
    Resizing,
    Scrolling,
}

/// One window on the surface
///
/// Geometry setters are crate-private; the manager is the only writer, and
/// every write re-establishes the minimum size and scroll clamp.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    rect: Rect,
    modal: bool,
    has_scroll: bool,
    gesture: Gesture,
    scroll_y: i32,
    thumb_height: i32,
    content_height: Option<i32>,
}

impl Window {
    /// Build a window, raising undersized geometry to the minimum
    pub fn new(id: WindowId, config: &WindowConfig, default_thumb_height: i32) -> Self {
        let pos = Point::new(config.x, config.y).confine();
        let size = confine_size(Size::new(config.width, config.height));
        Self {
            id,
            title: config.title.clone(),
            rect: Rect::from_pos_size(pos, size),
            modal: config.modal,
            has_scroll: config.has_scroll,
            gesture: Gesture::Idle,
            scroll_y: 0,
            thumb_height: config
                .thumb_height
                .unwrap_or(default_thumb_height)
                .max(FRAME_STYLE.min_thumb_height),
            content_height: None,
        }
    }

    /// Outer bounds
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> Point {
        self.rect.position()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn has_scroll(&self) -> bool {
        self.has_scroll
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture == Gesture::Dragging
    }

    pub fn is_resizing(&self) -> bool {
        self.gesture == Gesture::Resizing
    }

    pub(crate) fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    pub(crate) fn move_to(&mut self, pos: Point) {
        let pos = pos.confine();
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    pub(crate) fn resize_to(&mut self, size: Size) {
        let size = confine_size(size);
        self.rect.width = size.width;
        self.rect.height = size.height;
        self.set_scroll_y(self.scroll_y);
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Current thumb offset from the top of the track
    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn track_height(&self) -> i32 {
        self.rect.height - FRAME_STYLE.title_bar_height
    }

    /// Thumb height, never taller than the track
    pub fn thumb_height(&self) -> i32 {
        let track = self.track_height();
        let preferred = match self.content_height {
            Some(content) if content > track => {
                let ratio = i64::from(track) * i64::from(track) / i64::from(content);
                (ratio as i32).max(FRAME_STYLE.min_thumb_height)
            }
            Some(_) => track,
            None => self.thumb_height,
        };
        preferred.min(track)
    }

    /// Largest valid `scroll_y`
    pub fn max_scroll(&self) -> i32 {
        (self.track_height() - self.thumb_height()).max(0)
    }

    /// Set the thumb offset, clamped to `0..=max_scroll`
    pub fn set_scroll_y(&mut self, value: i32) {
        self.scroll_y = value.clamp(0, self.max_scroll());
    }

    /// Thumb position as a fraction of its travel; 0.0 when there is none
    pub fn scroll_fraction(&self) -> f32 {
        let max = self.max_scroll();
        if max == 0 {
            0.0
        } else {
            self.scroll_y as f32 / max as f32
        }
    }

    /// Tie the thumb to the height of the content being scrolled
    pub fn set_content_height(&mut self, height: i32) {
        self.content_height = Some(height.max(0));
        self.set_scroll_y(self.scroll_y);
    }

    // =========================================================================
    // Regions
    // =========================================================================

    /// Rectangle of a chrome region, or `None` when this window has no such
    /// control. Drawing and hit testing both go through here.
    pub fn region_rect(&self, region: WindowRegion) -> Option<Rect> {
        let r = self.rect;
        let s = &FRAME_STYLE;
        match region {
            WindowRegion::TitleBar => Some(Rect::new(r.x, r.y, r.width, s.title_bar_height)),
            WindowRegion::CloseBox => (!self.modal).then(|| {
                Rect::new(
                    r.x + s.close_box_inset,
                    r.y + s.close_box_inset,
                    s.close_box_size,
                    s.close_box_size,
                )
            }),
            WindowRegion::ScrollTrack => self.has_scroll.then(|| {
                Rect::new(
                    r.right() - s.scroll_track_width,
                    r.y + s.title_bar_height,
                    s.scroll_track_width,
                    self.track_height(),
                )
            }),
            WindowRegion::ScrollThumb => self.has_scroll.then(|| {
                Rect::new(
                    r.right() - s.scroll_track_width,
                    r.y + s.title_bar_height + self.scroll_y,
                    s.scroll_track_width,
                    self.thumb_height(),
                )
            }),
            WindowRegion::ResizeHandle => (!self.modal).then(|| {
                Rect::new(
                    r.right() - s.resize_handle_size,
                    r.bottom() - s.resize_handle_size,
                    s.resize_handle_size,
                    s.resize_handle_size,
                )
            }),
            WindowRegion::DismissButton => self.modal.then(|| {
                Rect::new(
                    r.x + r.width / 2 - s.dismiss_button_width / 2,
                    r.bottom() - s.dismiss_button_bottom,
                    s.dismiss_button_width,
                    s.dismiss_button_height,
                )
            }),
            WindowRegion::Content => Some(Rect::new(
                r.x,
                r.y + s.title_bar_height,
                r.width,
                self.track_height(),
            )),
        }
    }

    fn in_region(&self, region: WindowRegion, p: Point) -> bool {
        self.region_rect(region).is_some_and(|rect| rect.contains(p))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    pub fn in_title_bar(&self, p: Point) -> bool {
        self.in_region(WindowRegion::TitleBar, p)
    }

    /// Always false for modal windows
    pub fn in_close_box(&self, p: Point) -> bool {
        self.in_region(WindowRegion::CloseBox, p)
    }

    pub fn in_scroll_track(&self, p: Point) -> bool {
        self.in_region(WindowRegion::ScrollTrack, p)
    }

    /// Always false for modal windows
    pub fn in_resize_handle(&self, p: Point) -> bool {
        self.in_region(WindowRegion::ResizeHandle, p)
    }

    /// Always false for non-modal windows
    pub fn in_dismiss_button(&self, p: Point) -> bool {
        self.in_region(WindowRegion::DismissButton, p)
    }

    /// Region under `p` using pointer-down precedence: dismiss button,
    /// resize handle, close box, title bar, scroll track, then content.
    pub fn region_at(&self, p: Point) -> Option<WindowRegion> {
        if !self.contains(p) {
            return None;
        }
        let region = if self.in_dismiss_button(p) {
            WindowRegion::DismissButton
        } else if self.in_resize_handle(p) {
            WindowRegion::ResizeHandle
        } else if self.in_close_box(p) {
            WindowRegion::CloseBox
        } else if self.in_title_bar(p) {
            WindowRegion::TitleBar
        } else if self.in_region(WindowRegion::ScrollThumb, p) {
            WindowRegion::ScrollThumb
        } else if self.in_scroll_track(p) {
            WindowRegion::ScrollTrack
        } else {
            WindowRegion::Content
        };
        Some(region)
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Paint the window and its chrome
    pub fn draw(&self, surface: &mut Surface) {
        let s = &FRAME_STYLE;

        if self.modal {
            let bounds = surface.bounds();
            surface.fill_rect(bounds, palette::MODAL_DIM);
        }

        if let Some(body) = self.region_rect(WindowRegion::Content) {
            surface.fill_rect(body, palette::WHITE);
        }
        surface.stroke_rect(self.rect, palette::BLACK);

        if let Some(title_bar) = self.region_rect(WindowRegion::TitleBar) {
            surface.fill_rect(title_bar, palette::TITLE_BAR);
            surface.stroke_rect(title_bar, palette::BLACK);
        }
        if let Some(close_box) = self.region_rect(WindowRegion::CloseBox) {
            surface.fill_rect(close_box, palette::BLACK);
        }

        let text_room = self.rect.width - s.title_text_x - s.close_box_inset;
        let title = font::truncate_to_width(&self.title, text_room);
        surface.text(
            Point::new(self.rect.x + s.title_text_x, self.rect.y + s.title_text_y),
            title,
            palette::BLACK,
        );

        if let Some(track) = self.region_rect(WindowRegion::ScrollTrack) {
            surface.fill_rect(track, palette::SCROLL_TRACK);
        }
        if let Some(thumb) = self.region_rect(WindowRegion::ScrollThumb) {
            surface.fill_rect(thumb, palette::SCROLL_THUMB);
        }

        if let Some(handle) = self.region_rect(WindowRegion::ResizeHandle) {
            surface.stroke_rect(handle, palette::BLACK);
            surface.line(
                Point::new(handle.right() - 1, handle.bottom() - 10),
                Point::new(handle.right() - 10, handle.bottom() - 1),
                palette::BLACK,
            );
        }

        if let Some(button) = self.region_rect(WindowRegion::DismissButton) {
            surface.fill_rect(button, palette::BUTTON);
            surface.stroke_rect(button, palette::BLACK);
            let label = "OK";
            let label_origin = Point::new(
                button.x + (button.width - font::text_width(label)) / 2,
                button.y + (button.height - font::GLYPH_HEIGHT) / 2,
            );
            surface.text(label_origin, label, palette::BLACK);
        }
    }
}

/// Raise a size to the minimum window size and cap it at `COORD_LIMIT`
fn confine_size(size: Size) -> Size {
    let min = FRAME_STYLE.min_size;
    Size::new(
        size.width.clamp(min.width, COORD_LIMIT),
        size.height.clamp(min.height, COORD_LIMIT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceSize;

    fn window(x: i32, y: i32, w: i32, h: i32) -> Window {
        Window::new(1, &WindowConfig::new(Rect::new(x, y, w, h), "Test"), 30)
    }

    fn modal(x: i32, y: i32, w: i32, h: i32) -> Window {
        Window::new(2, &WindowConfig::modal(Rect::new(x, y, w, h), "Alert"), 30)
    }

    #[test]
    fn test_undersized_config_is_raised() {
        let w = window(0, 0, 10, 10);
        assert_eq!(w.size(), Size::new(100, 50));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut w = window(0, 0, 200, 150);
        w.resize_to(Size::new(-20, 3));
        assert_eq!(w.size(), Size::new(100, 50));
    }

    #[test]
    fn test_scroll_clamp() {
        let mut w = window(0, 0, 200, 150);
        // track = 134, thumb = 30
        assert_eq!(w.max_scroll(), 104);

        w.set_scroll_y(500);
        assert_eq!(w.scroll_y(), 104);
        w.set_scroll_y(-5);
        assert_eq!(w.scroll_y(), 0);
    }

    #[test]
    fn test_shrinking_reclamps_scroll() {
        let mut w = window(0, 0, 200, 150);
        w.set_scroll_y(100);
        w.resize_to(Size::new(200, 60));
        // track = 44, thumb = 30
        assert_eq!(w.scroll_y(), 14);
    }

    #[test]
    fn test_content_height_drives_thumb() {
        let mut w = window(0, 0, 200, 116);
        // track = 100
        w.set_content_height(400);
        assert_eq!(w.thumb_height(), 25);
        assert_eq!(w.max_scroll(), 75);

        w.set_content_height(50);
        assert_eq!(w.thumb_height(), 100);
        assert_eq!(w.max_scroll(), 0);

        w.set_content_height(100_000);
        assert_eq!(w.thumb_height(), FRAME_STYLE.min_thumb_height);
    }

    #[test]
    fn test_tall_window_thumb_from_content() {
        let mut w = window(0, 0, 200, 60_000);
        // track = 59_984; track squared does not fit in i32
        w.set_content_height(100_000);
        assert_eq!(w.thumb_height(), 35_980);
        assert_eq!(w.max_scroll(), 59_984 - 35_980);

        w.set_scroll_y(i32::MAX);
        assert_eq!(w.scroll_y(), w.max_scroll());
    }

    #[test]
    fn test_geometry_is_confined() {
        let w = window(i32::MAX - 40, i32::MIN, i32::MAX, 10);
        assert_eq!(w.position(), Point::new(COORD_LIMIT, -COORD_LIMIT));
        assert_eq!(w.size(), Size::new(COORD_LIMIT, 50));

        let mut w = window(0, 0, 200, 150);
        w.move_to(Point::new(i32::MAX, i32::MIN));
        assert_eq!(w.position(), Point::new(COORD_LIMIT, -COORD_LIMIT));
        w.resize_to(Size::new(i32::MAX, i32::MAX));
        assert_eq!(w.size(), Size::new(COORD_LIMIT, COORD_LIMIT));
    }

    #[test]
    fn test_scroll_fraction() {
        let mut w = window(0, 0, 200, 150);
        assert_eq!(w.scroll_fraction(), 0.0);
        w.set_scroll_y(52);
        assert!((w.scroll_fraction() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_chrome_rects() {
        let w = window(100, 100, 200, 150);
        assert_eq!(
            w.region_rect(WindowRegion::TitleBar),
            Some(Rect::new(100, 100, 200, 16))
        );
        assert_eq!(
            w.region_rect(WindowRegion::CloseBox),
            Some(Rect::new(102, 102, 8, 8))
        );
        assert_eq!(
            w.region_rect(WindowRegion::ScrollTrack),
            Some(Rect::new(288, 116, 12, 134))
        );
        assert_eq!(
            w.region_rect(WindowRegion::ResizeHandle),
            Some(Rect::new(288, 238, 12, 12))
        );
        assert_eq!(w.region_rect(WindowRegion::DismissButton), None);
    }

    #[test]
    fn test_modal_has_no_close_or_resize() {
        let m = modal(180, 180, 180, 100);
        assert_eq!(m.region_rect(WindowRegion::CloseBox), None);
        assert_eq!(m.region_rect(WindowRegion::ResizeHandle), None);
        assert_eq!(
            m.region_rect(WindowRegion::DismissButton),
            Some(Rect::new(240, 250, 60, 20))
        );

        assert!(!m.in_close_box(Point::new(183, 183)));
        assert!(!m.in_resize_handle(Point::new(355, 275)));
        assert!(m.in_dismiss_button(Point::new(270, 260)));
        assert!(m.in_title_bar(Point::new(183, 183)));
    }

    #[test]
    fn test_non_modal_has_no_dismiss_button() {
        let w = window(0, 0, 200, 150);
        for y in 0..150 {
            for x in 0..200 {
                assert!(!w.in_dismiss_button(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn test_region_at_precedence() {
        let w = window(100, 100, 200, 150);
        assert_eq!(w.region_at(Point::new(105, 105)), Some(WindowRegion::CloseBox));
        assert_eq!(w.region_at(Point::new(110, 110)), Some(WindowRegion::TitleBar));
        assert_eq!(w.region_at(Point::new(200, 105)), Some(WindowRegion::TitleBar));
        assert_eq!(w.region_at(Point::new(295, 120)), Some(WindowRegion::ScrollThumb));
        assert_eq!(w.region_at(Point::new(295, 200)), Some(WindowRegion::ScrollTrack));
        // Resize handle wins over the scroll track it overlaps
        assert_eq!(
            w.region_at(Point::new(295, 245)),
            Some(WindowRegion::ResizeHandle)
        );
        assert_eq!(w.region_at(Point::new(150, 200)), Some(WindowRegion::Content));
        assert_eq!(w.region_at(Point::new(300, 200)), None);
    }

    #[test]
    fn test_resize_handle_is_bounded() {
        let w = window(100, 100, 200, 150);
        // Below and to the right of the window is not the handle
        assert!(!w.in_resize_handle(Point::new(400, 400)));
        assert!(w.in_resize_handle(Point::new(299, 249)));
    }

    #[test]
    fn test_draw_modal_dims_surface() {
        let mut surface = Surface::new(SurfaceSize::VGA).unwrap();
        surface.clear(palette::WHITE);
        modal(180, 180, 180, 100).draw(&mut surface);

        let dimmed = palette::MODAL_DIM.blend_over(palette::WHITE);
        assert_eq!(surface.pixel(0, 0), Some(dimmed));
        assert_eq!(surface.pixel(639, 479), Some(dimmed));
        // Body is painted opaque over the dim
        assert_eq!(surface.pixel(200, 220), Some(palette::WHITE));
    }

    #[test]
    fn test_draw_far_window_does_not_overflow() {
        let mut surface = Surface::new(SurfaceSize::VGA).unwrap();
        let before = surface.clone();
        let w = window(2_147_483_600, 2_147_483_600, 200, 150);
        w.draw(&mut surface);
        assert_eq!(surface, before);
        assert_eq!(w.region_at(Point::new(i32::MAX, i32::MAX)), None);
    }

    #[test]
    fn test_draw_offscreen_window_is_harmless() {
        let mut surface = Surface::new(SurfaceSize::CLASSIC).unwrap();
        let before = surface.clone();
        window(-1000, -1000, 200, 150).draw(&mut surface);
        window(5000, 5000, 200, 150).draw(&mut surface);
        assert_eq!(surface, before);
    }
}
