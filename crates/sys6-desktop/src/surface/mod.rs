//! The single raster target all windows are painted onto
//!
//! `Surface` is an immediate-mode RGBA framebuffer with the handful of
//! primitives the chrome needs: filled and stroked rectangles, dashed
//! outlines, lines, and 8x8 bitmap text. Every primitive clips to the
//! surface bounds, so callers may pass geometry that lies partly or wholly
//! off-screen. There is no damage tracking; the manager repaints everything.

mod color;
pub mod font;

pub use color::{palette, Color};

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Point, Rect};

/// Fixed surface resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Original compact Macintosh screen
    pub const CLASSIC: SurfaceSize = SurfaceSize::new(512, 342);
    /// 640x480 VGA
    pub const VGA: SurfaceSize = SurfaceSize::new(640, 480);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions multiplied by `factor`
    pub fn scaled(self, factor: u32) -> DesktopResult<SurfaceSize> {
        match (self.width.checked_mul(factor), self.height.checked_mul(factor)) {
            (Some(width), Some(height)) => Ok(SurfaceSize::new(width, height)),
            _ => Err(DesktopError::InvalidSurface {
                width: self.width.saturating_mul(factor),
                height: self.height.saturating_mul(factor),
            }),
        }
    }

    /// Number of pixels; fails for an empty size or one too large to address
    fn pixel_count(self) -> DesktopResult<usize> {
        let invalid = DesktopError::InvalidSurface {
            width: self.width,
            height: self.height,
        };
        let max = i32::MAX as u32;
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(invalid);
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(invalid)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::VGA
    }
}

/// RGBA raster surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Create a surface cleared to transparent black
    pub fn new(size: SurfaceSize) -> DesktopResult<Self> {
        let len = size.pixel_count()?;
        Ok(Self {
            width: size.width,
            height: size.height,
            pixels: vec![Color::default(); len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    /// The whole surface as a rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Centre point, anchor of the open/close zoom
    pub fn center(&self) -> Point {
        Point::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Raw pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Read one pixel, `None` outside the surface
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Pixels as tightly packed RGBA bytes, suitable for `ImageData`
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Paint one pixel, alpha-blending translucent colours
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.blend_over(self.pixels[i]);
        }
    }

    /// Overwrite every pixel
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle (clipped)
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.intersection(&self.bounds()) else {
            return;
        };
        let stride = self.width as usize;
        for y in clip.y..clip.bottom() {
            let row = y as usize * stride;
            for px in &mut self.pixels[row + clip.x as usize..row + clip.right() as usize] {
                *px = color.blend_over(*px);
            }
        }
    }

    /// One-pixel outline along the inside edge of `rect`
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        for p in perimeter(rect) {
            self.put_pixel(p.x, p.y, color);
        }
    }

    /// Dashed one-pixel outline; the pattern runs clockwise from the top-left
    pub fn stroke_rect_dashed(&mut self, rect: Rect, color: Color, dash: (u32, u32)) {
        let (on, off) = dash;
        let period = (on + off).max(1) as usize;
        for (i, p) in perimeter(rect).enumerate() {
            if i % period < on as usize {
                self.put_pixel(p.x, p.y, color);
            }
        }
    }

    /// Line between two points, inclusive, using Bresenham's algorithm
    pub fn line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = from.x;
        let mut y = from.y;
        loop {
            self.put_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Single-line text with its top-left glyph cell at `origin`
    pub fn text(&mut self, origin: Point, text: &str, color: Color) {
        let mut x = origin.x;
        for ch in text.chars() {
            let rows = font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (1 << col) != 0 {
                        self.put_pixel(x + col, origin.y + row as i32, color);
                    }
                }
            }
            x = x.saturating_add(font::GLYPH_WIDTH);
        }
    }

    /// Integer nearest-neighbour upscale; every source pixel becomes a
    /// `factor` x `factor` block with no filtering.
    ///
    /// Fails with `InvalidSurface` when the scaled size does not fit.
    pub fn upscale(&self, factor: u32) -> DesktopResult<Surface> {
        let factor = factor.max(1);
        let size = self.size().scaled(factor)?;
        let (width, height) = (size.width, size.height);
        let mut pixels = Vec::with_capacity(size.pixel_count()?);
        for y in 0..height {
            let src_row = (y / factor) as usize * self.width as usize;
            for x in 0..width {
                pixels.push(self.pixels[src_row + (x / factor) as usize]);
            }
        }
        Ok(Surface {
            width,
            height,
            pixels,
        })
    }
}

/// Pixels on the inside edge of a rectangle, clockwise from the top-left,
/// each visited once.
fn perimeter(rect: Rect) -> impl Iterator<Item = Point> {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right().saturating_sub(1), rect.bottom().saturating_sub(1));
    let empty = rect.is_empty();
    let single_row = y0 == y1;
    let single_col = x0 == x1;

    let top = (x0..=x1).map(move |x| Point::new(x, y0));
    let right = (y0.saturating_add(1)..=y1).map(move |y| Point::new(x1, y));
    let bottom = (x0..x1)
        .rev()
        .filter(move |_| !single_row)
        .map(move |x| Point::new(x, y1));
    let left = (y0.saturating_add(1)..y1)
        .rev()
        .filter(move |_| !single_col)
        .map(move |y| Point::new(x0, y));

    top.chain(right)
        .chain(bottom)
        .chain(left)
        .filter(move |_| !empty)
}
