//! Collaborators around the diff engine
//!
//! The engine itself only walks in-memory values; this module supplies
//! everything around it:
//!
//! - `output`: writer plumbing, including the pager adapter
//! - `session`: the handle a command invocation runs against
//! - `snapshot`: loading evaluated value trees from JSON snapshot files

pub mod output;
pub mod session;
pub mod snapshot;
