//! Frame-by-frame driver for an interactive viewer.
//!
//! The session reads one input snapshot per frame, lets the view controller
//! move the view, and re-renders only when the visible region changed.

mod session;

pub use session::{ViewerSession, ViewerSessionError};
