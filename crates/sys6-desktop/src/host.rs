//! Messages exchanged with the application layer
//!
//! The host talks to the toolkit with tagged messages of the shape
//! `{ "tag": "...", "payload": ... }`. Commands flow in and are applied with
//! [`WindowManager::apply`](crate::WindowManager::apply); events are queued
//! by the manager and drained with
//! [`WindowManager::drain_events`](crate::WindowManager::drain_events).

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::types::WindowId;
use crate::window::WindowConfig;

/// Most host events held before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Request from the application layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "payload")]
pub enum HostCommand {
    /// Open a window with a zoom-in
    OpenWindow(WindowConfig),
    /// Close a window with a zoom-out
    CloseWindow { window: WindowId },
    /// Hold or release the interaction lock, e.g. while a sound plays
    SetInteractionLock { locked: bool },
}

impl HostCommand {
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Why a window went away
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// User clicked the close box
    CloseBox,
    /// User clicked a modal's dismiss button
    Dismissed,
    /// The host asked for it
    Host,
}

/// Notification for the application layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "payload")]
pub enum HostEvent {
    /// Zoom-in finished; the window is interactive
    WindowOpened { window: WindowId },
    /// Zoom-out finished; the window is gone
    WindowClosed {
        window: WindowId,
        reason: CloseReason,
    },
}

impl HostEvent {
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
