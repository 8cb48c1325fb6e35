use crate::artifacts::diff::changelog::Changelog;
use crate::artifacts::diff::value_diff::Differ;
use crate::artifacts::value::value::Value;
use bitflags::bitflags;

bitflags! {
    /// Field classifications excluded from comparison.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IgnoreFields: u8 {
        const DEFINITIONS = 0b001;
        const OPTIONAL = 0b010;
        const HIDDEN = 0b100;
    }
}

/// Comparison configuration, immutable for the duration of a diff run.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    /// Resolve disjunction defaults on both sides before comparing
    pub use_defaults: bool,
    /// Field classes whose differences are never reported
    pub ignore: IgnoreFields,
    /// Abort the traversal beyond this many selectors; `None` = unbounded
    pub max_depth: Option<usize>,
}

impl Profile {
    /// Structural comparison: raw constraints, every field class visible.
    pub fn schema() -> Self {
        Profile::default()
    }

    /// Data comparison: defaults resolved, definitions ignored.
    pub fn final_data() -> Self {
        Profile {
            use_defaults: true,
            ignore: IgnoreFields::DEFINITIONS,
            max_depth: None,
        }
    }

    pub fn ignores_definitions(&self) -> bool {
        self.ignore.contains(IgnoreFields::DEFINITIONS)
    }

    pub fn ignores_optional(&self) -> bool {
        self.ignore.contains(IgnoreFields::OPTIONAL)
    }

    pub fn ignores_hidden(&self) -> bool {
        self.ignore.contains(IgnoreFields::HIDDEN)
    }

    /// Runs a diff under this profile and returns the edit script.
    ///
    /// On a traversal error the partially accumulated changelog is dropped;
    /// use [`Differ`] directly to retain partial results.
    pub fn diff(&self, x: &Value, y: &Value) -> anyhow::Result<Changelog> {
        let mut differ = Differ::new(self);
        differ.diff(x, y)?;
        Ok(differ.into_changelog())
    }
}
