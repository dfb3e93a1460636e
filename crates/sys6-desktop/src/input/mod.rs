//! Input routing and the drag/resize/scroll state machine
//!
//! [`InputRouter::route`] turns a pointer-down position into an [`Intent`]
//! by hit testing interactive windows front-to-back and stopping at the
//! first window under the pointer. The router also holds the current
//! [`InteractionState`]; the manager drives its transitions.

mod router;
mod state;

pub use router::{InputResult, InputRouter, Intent};
pub use state::{resize_candidate, InteractionState};
