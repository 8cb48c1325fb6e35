//! Positional list comparison
//!
//! List elements carry no selector, so unlike structs there is no stable
//! identity to match on and no alignment is attempted: elements compare in
//! lock-step by index, and a length mismatch collapses to one update
//! carrying both full snapshots.

use crate::artifacts::diff::value_diff::Differ;
use crate::artifacts::value::path::Selector;
use crate::artifacts::value::value::Value;

impl Differ<'_> {
    pub(crate) fn diff_list(
        &mut self,
        xs: &[Value],
        ys: &[Value],
        x: &Value,
        y: &Value,
    ) -> anyhow::Result<bool> {
        if xs.len() != ys.len() {
            self.record_update(x, y);
            return Ok(true);
        }

        let mut changed = false;
        for (index, (xe, ye)) in xs.iter().zip(ys).enumerate() {
            if xe == ye {
                continue;
            }
            changed |= self.at(Selector::Index(index), |differ| differ.diff_value(xe, ye))?;
        }

        // a nested difference bubbles one aggregate update at every
        // enclosing list level
        if changed {
            self.record_update(x, y);
        }

        Ok(changed)
    }
}
