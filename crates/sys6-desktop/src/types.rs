//! Core type definitions for the window toolkit

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer that
/// doubles as the window's slot in the manager's arena. IDs are never reused
/// within a `WindowManager` instance, so a stale ID can only miss, never
/// alias a different window.
pub type WindowId = u64;
