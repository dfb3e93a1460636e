//! Browser bindings
//!
//! [`DesktopHandle`] owns a [`WindowManager`] and the canvas it is presented
//! on. The page forwards pointer events in canvas pixels and calls
//! [`DesktopHandle::tick`] from `requestAnimationFrame`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::config::DesktopConfig;
use crate::error::DesktopError;
use crate::host::HostCommand;
use crate::input::InputResult;
use crate::manager::WindowManager;
use crate::types::WindowId;
use crate::window::WindowConfig;

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn result_name(result: InputResult) -> String {
    match result {
        InputResult::Handled => "handled",
        InputResult::Unhandled => "unhandled",
        InputResult::Suppressed => "suppressed",
    }
    .to_string()
}

/// A desktop bound to a canvas element
#[wasm_bindgen]
pub struct DesktopHandle {
    manager: WindowManager,
    context: CanvasRenderingContext2d,
    scale: u32,
}

#[wasm_bindgen]
impl DesktopHandle {
    /// Attach to the canvas with the given element ID.
    ///
    /// `config_json` is an optional `DesktopConfig`; `scale` is the integer
    /// upscale factor used for presentation.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        config_json: Option<String>,
        scale: u32,
    ) -> Result<DesktopHandle, JsValue> {
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(to_js)?,
            None => DesktopConfig::default(),
        };
        let manager = WindowManager::new(config).map_err(to_js)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
            .dyn_into()?;

        let scale = scale.max(1);
        let size = manager.surface().size().scaled(scale).map_err(to_js)?;
        canvas.set_width(size.width);
        canvas.set_height(size.height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        context.set_image_smoothing_enabled(false);

        log(&format!(
            "[desktop] {}x{} canvas #{} at {}x",
            size.width, size.height, canvas_id, scale
        ));

        let handle = DesktopHandle {
            manager,
            context,
            scale,
        };
        handle.present()?;
        Ok(handle)
    }

    fn to_surface(&self, v: f64) -> i32 {
        (v / self.scale as f64).floor() as i32
    }

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        let result = self
            .manager
            .handle_pointer_down(self.to_surface(x), self.to_surface(y));
        self.present()?;
        Ok(result_name(result))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        let result = self
            .manager
            .handle_pointer_move(self.to_surface(x), self.to_surface(y));
        self.present()?;
        Ok(result_name(result))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        let result = self
            .manager
            .handle_pointer_up(self.to_surface(x), self.to_surface(y));
        self.present()?;
        Ok(result_name(result))
    }

    /// Advance transitions one step; true while any are still running
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        if !self.manager.is_animating() {
            return Ok(false);
        }
        let running = self.manager.tick_frame();
        self.present()?;
        Ok(running)
    }

    /// Open a window from a `WindowConfig` JSON object
    #[wasm_bindgen]
    pub fn open_window(&mut self, config_json: &str) -> Result<WindowId, JsValue> {
        let config: WindowConfig = serde_json::from_str(config_json)
            .map_err(|e| to_js(DesktopError::from(e)))?;
        let id = self.manager.open_window(config);
        self.present()?;
        Ok(id)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: WindowId) -> Result<(), JsValue> {
        self.manager.close_window(id).map_err(to_js)?;
        self.present()
    }

    /// Apply a `{ tag, payload }` command
    #[wasm_bindgen]
    pub fn send(&mut self, command_json: &str) -> Result<Option<WindowId>, JsValue> {
        let command = HostCommand::from_json(command_json).map_err(to_js)?;
        let opened = self.manager.apply(command).map_err(to_js)?;
        self.present()?;
        Ok(opened)
    }

    #[wasm_bindgen]
    pub fn set_interaction_locked(&mut self, locked: bool) {
        self.manager.set_interaction_locked(locked);
    }

    /// Events since the last call, as a JSON array
    #[wasm_bindgen]
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let events = self.manager.drain_events();
        serde_json::to_string(&events).map_err(|e| to_js(DesktopError::from(e)))
    }

    fn present(&self) -> Result<(), JsValue> {
        let frame = self.manager.surface().upscale(self.scale).map_err(to_js)?;
        let bytes = frame.to_rgba_bytes();
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&bytes[..]),
            frame.width(),
            frame.height(),
        )?;
        self.context.put_image_data(&image, 0.0, 0.0)
    }
}
