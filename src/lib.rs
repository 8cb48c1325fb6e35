//! confdiff - structural diffing for hierarchical configuration values
//!
//! Computes an ordered edit script of create/update/delete entries between
//! two evaluated configuration trees, instead of a bare equality verdict.
//! The engine walks already-evaluated values only; producing those values
//! (from JSON snapshot files) is the job of the loader in [`areas`].

pub mod areas;
pub mod artifacts;
pub mod commands;

use clap::ValueEnum;

/// Rendering styles for a changelog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChangeDisplayFormat {
    /// One colored line per change, preceded by a snapshot header
    #[default]
    Long,
    /// `<status letter>\t<path>` per change
    NameStatus,
    /// A JSON array of change objects
    Json,
}

/// Canonical comparison profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProfilePreset {
    /// Structural comparison: raw constraints, all field classes visible
    Schema,
    /// Data comparison: defaults resolved, definitions ignored
    #[default]
    Final,
}
