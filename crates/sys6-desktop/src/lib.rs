//! System 6 style window toolkit
//!
//! This crate draws overlapping, draggable windows on a single fixed-size
//! raster surface:
//! - Window stack with z-order, open/close lifecycle and modal windows
//! - Pointer routing by z-order, with drag, resize and scroll gestures
//! - Zoom open/close transitions stepped by the host's frame loop
//! - Bitmap rendering of window chrome with 8x8 glyph titles
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry (`Point`, `Size`, `Rect`) and `FRAME_STYLE`
//! - [`surface`]: RGBA raster with fill, stroke, line and text primitives
//! - [`window`]: Window value type, chrome regions and the window stack
//! - [`input`]: Hit-test routing and the interaction state machine
//! - [`transition`]: Zoom transitions and the animator that steps them
//! - [`host`]: Tagged command/event messages for the application layer
//!
//! ```text
//!   pointer ──▶ InputRouter::route ──▶ Intent ──▶ WindowManager
//!                                                   │   │
//!                         InteractionState ◀────────┘   └──▶ TransitionAnimator
//!                                                   │
//!   tick_frame ────────────────────────────────────▶ redraw ──▶ Surface
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sys6_desktop::{DesktopConfig, Rect, WindowConfig, WindowManager};
//!
//! let mut wm = WindowManager::new(DesktopConfig::default()).unwrap();
//! let id = wm.open_window(WindowConfig::new(Rect::new(100, 100, 200, 150), "Notes"));
//! while wm.tick_frame() {}
//!
//! // Drag the window by its title bar
//! wm.handle_pointer_down(150, 105);
//! wm.handle_pointer_move(250, 205);
//! wm.handle_pointer_up(250, 205);
//! assert_eq!(wm.window(id).unwrap().rect(), Rect::new(200, 200, 200, 150));
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod math;
pub mod surface;
pub mod transition;
pub mod window;

mod manager;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::DesktopConfig;
pub use error::{DesktopError, DesktopResult};
pub use host::{CloseReason, HostCommand, HostEvent, MAX_PENDING_EVENTS};
pub use input::{InputResult, InputRouter, Intent, InteractionState};
pub use manager::WindowManager;
pub use math::{FrameStyle, Point, Rect, Size, COORD_LIMIT, FRAME_STYLE};
pub use surface::{palette, Color, Surface, SurfaceSize};
pub use transition::{TransitionAnimator, ZoomDirection, ZoomTransition, TRANSITION_STEPS};
pub use types::WindowId;
pub use window::{Gesture, Lifecycle, Window, WindowConfig, WindowRegion, WindowStack};
