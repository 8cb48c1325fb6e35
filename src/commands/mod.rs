//! Command implementations
//!
//! Each user-facing operation is implemented on [`Session`] in its own
//! module; the binary in `main.rs` only parses arguments and dispatches.
//!
//! [`Session`]: crate::areas::session::Session

pub mod diff;
