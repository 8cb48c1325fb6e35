//! Configuration-diff data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `value`: evaluated configuration values (scalars, structs, lists,
//!   constraints, disjunctions, bottom), selectors and paths
//! - `diff`: the diff traversal engine and its edit script
//!
//! Everything here is pure and in-memory; loading snapshots from disk and
//! rendering output live in the `areas` and `commands` modules.

pub mod diff;
pub mod value;
