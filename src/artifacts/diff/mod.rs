//! Structural diffing of evaluated configuration values
//!
//! This module implements the diff traversal engine:
//!
//! - `profile`: comparison profiles (presets, field-visibility filters,
//!   the recursion depth guard)
//! - `changelog`: the ordered edit script, change records and post-filters
//! - `value_diff`: value-kind dispatch and scalar/constraint comparison
//! - `struct_diff`: order-preserving field comparison (topological drain)
//! - `list_diff`: positional list comparison with change bubbling
//!
//! Differences are reported as changes, never as errors; the engine walks
//! already-evaluated values and performs no I/O.

pub mod changelog;
pub mod list_diff;
pub mod profile;
pub mod struct_diff;
pub mod value_diff;

use crate::artifacts::diff::changelog::Changelog;
use crate::artifacts::diff::profile::Profile;
use crate::artifacts::value::value::Value;

/// Diffs two values under the final-data profile.
pub fn diff(x: &Value, y: &Value) -> anyhow::Result<Changelog> {
    Profile::final_data().diff(x, y)
}
