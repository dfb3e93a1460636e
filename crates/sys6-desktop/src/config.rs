//! Toolkit configuration
//!
//! Chrome metrics are fixed in [`FRAME_STYLE`](crate::math::FRAME_STYLE);
//! everything a host may reasonably want to change lives here.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::FRAME_STYLE;
use crate::surface::{palette, Color, SurfaceSize};

/// Configuration for a [`WindowManager`](crate::WindowManager)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Surface resolution
    pub surface: SurfaceSize,
    /// Colour behind all windows
    pub background: Color,
    /// Thumb height for windows that do not set their own
    pub thumb_height: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::VGA,
            background: palette::DESKTOP,
            thumb_height: FRAME_STYLE.scroll_thumb_height,
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration for a 512x342 classic screen
    pub fn classic() -> Self {
        Self {
            surface: SurfaceSize::CLASSIC,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;

    #[test]
    fn test_default_config() {
        let config = DesktopConfig::default();
        assert_eq!(config.surface, SurfaceSize::VGA);
        assert_eq!(config.background, palette::DESKTOP);
        assert_eq!(config.thumb_height, 30);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            DesktopConfig::from_json(r#"{"surface":{"width":512,"height":342}}"#).unwrap();
        assert_eq!(config, DesktopConfig::classic());
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = DesktopConfig::from_json("{}").unwrap();
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = DesktopConfig::from_json("{").unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
