//! Value-kind dispatch
//!
//! The entry point of the traversal: resolves defaults, classifies both
//! sides and either records an update in place or hands control to the
//! struct/list differs. Mismatches are never errors - the only engine
//! error is the optional traversal depth guard.

use crate::artifacts::diff::changelog::{ChangeType, Changelog};
use crate::artifacts::diff::profile::Profile;
use crate::artifacts::value::path::{Path, Selector};
use crate::artifacts::value::value::Value;

/// Recursive diff driver: owns the profile, the path cursor and the
/// changelog accumulator for a single run.
///
/// After an error the changes appended so far are still retrievable via
/// [`Differ::into_changelog`]; callers must treat such a changelog as
/// partial and unreliable.
#[derive(Debug)]
pub struct Differ<'p> {
    pub(crate) profile: &'p Profile,
    pub(crate) changelog: Changelog,
    pub(crate) path: Path,
}

impl<'p> Differ<'p> {
    pub fn new(profile: &'p Profile) -> Self {
        Differ {
            profile,
            changelog: Changelog::new(),
            path: Path::root(),
        }
    }

    pub fn changelog(&self) -> &Changelog {
        &self.changelog
    }

    pub fn into_changelog(self) -> Changelog {
        self.changelog
    }

    /// Compares two roots, appending one change per divergence. Returns
    /// whether anything diverged.
    pub fn diff(&mut self, x: &Value, y: &Value) -> anyhow::Result<bool> {
        self.diff_value(x, y)
    }

    pub(crate) fn diff_value(&mut self, x: &Value, y: &Value) -> anyhow::Result<bool> {
        if let Some(max_depth) = self.profile.max_depth
            && self.path.len() > max_depth
        {
            anyhow::bail!(
                "maximum traversal depth {} exceeded at '{}'",
                max_depth,
                self.path
            );
        }

        // Defaults must resolve before the class and concreteness checks,
        // so soft values compare as their resolved branch.
        let (x, y) = if self.profile.use_defaults {
            (x.default(), y.default())
        } else {
            (x, y)
        };

        if x.class() != y.class() {
            self.record_update(x, y);
            return Ok(true);
        }

        match (x.is_concrete(), y.is_concrete()) {
            (true, false) | (false, true) => {
                self.record_update(x, y);
                Ok(true)
            }

            (true, true) => match (x, y) {
                (Value::Struct(xs), Value::Struct(ys)) => self.diff_struct(xs, ys),
                (Value::List(xs), Value::List(ys)) => self.diff_list(xs, ys, x, y),
                _ => Ok(self.update_unless_equal(x, y)),
            },

            (false, false) => match (x, y) {
                // structural equality is not meaningful for error values;
                // compare the rendered diagnostics instead
                (Value::Bottom { .. }, Value::Bottom { .. }) => {
                    if x.to_string() != y.to_string() {
                        self.record_update(x, y);
                        return Ok(true);
                    }
                    Ok(false)
                }
                _ => Ok(self.update_unless_equal(x, y)),
            },
        }
    }

    /// Runs `f` with the path cursor one selector deeper.
    pub(crate) fn at<T>(
        &mut self,
        selector: Selector,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.path.push(selector);
        let out = f(self);
        self.path.pop();
        out
    }

    pub(crate) fn record_update(&mut self, x: &Value, y: &Value) {
        self.changelog.add(
            ChangeType::Update,
            self.path.clone(),
            Some(x.clone()),
            Some(y.clone()),
        );
    }

    fn update_unless_equal(&mut self, x: &Value, y: &Value) -> bool {
        if x == y {
            false
        } else {
            self.record_update(x, y);
            true
        }
    }
}
