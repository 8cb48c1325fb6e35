//! Order-preserving struct comparison
//!
//! Field order in a struct is semantically meaningful, so the two field
//! sequences are merged with a best-effort topological sort - a variant of
//! Kahn's draining algorithm. Each side's declaration order contributes
//! the edges, which means the next processable fields are exactly the
//! leading ones with no counterpart still pending on the other side. Ties
//! and inconsistencies resolve in favor of x's ordering; when the two
//! orders admit no consistent interleaving the output is deterministic
//! but not a certified minimal transform.

use crate::artifacts::diff::changelog::ChangeType;
use crate::artifacts::diff::value_diff::Differ;
use crate::artifacts::value::field::Field;
use crate::artifacts::value::path::Selector;
use std::collections::HashMap;

/// Debug logging for the drain loop, enabled with the `debug_diff`
/// feature flag (`cargo test --features debug_diff`)
macro_rules! drain_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// 1-based position of a selector in a side's lookup table; zero means
/// absent or already consumed.
fn position(table: &HashMap<&Selector, usize>, selector: &Selector) -> usize {
    table.get(selector).copied().unwrap_or(0)
}

impl Differ<'_> {
    pub(crate) fn diff_struct(&mut self, xs: &[Field], ys: &[Field]) -> anyhow::Result<bool> {
        let mut changed = false;

        let mut x_pos: HashMap<&Selector, usize> = HashMap::with_capacity(xs.len());
        let mut y_pos: HashMap<&Selector, usize> = HashMap::with_capacity(ys.len());
        for (i, field) in xs.iter().enumerate() {
            x_pos.insert(&field.selector, i + 1);
        }
        for (i, field) in ys.iter().enumerate() {
            y_pos.insert(&field.selector, i + 1);
        }

        let mut xi = 0;
        let mut yi = 0;

        while xi < xs.len() || yi < ys.len() {
            // Drain x's leading fields with no counterpart remaining in y:
            // they were deleted, subtree and all.
            while xi < xs.len() {
                let xf = &xs[xi];
                if position(&y_pos, &xf.selector) > 0 {
                    break;
                }
                xi += 1;
                if self.skip_field(xf) {
                    continue;
                }
                drain_log!("struct drain: delete {}", xf.selector);
                self.record_subtree(ChangeType::Delete, xf);
                changed = true;
            }

            // Drain y's leading fields symmetrically as creations,
            // consuming entries the match phase already handled.
            while yi < ys.len() {
                let yf = &ys[yi];
                if position(&y_pos, &yf.selector) == 0 {
                    yi += 1;
                    continue;
                }
                if position(&x_pos, &yf.selector) > 0 {
                    break;
                }
                y_pos.insert(&yf.selector, 0);
                yi += 1;
                if self.skip_field(yf) {
                    continue;
                }
                drain_log!("struct drain: create {}", yf.selector);
                self.record_subtree(ChangeType::Create, yf);
                changed = true;
            }

            // Compare fields present on both sides.
            while xi < xs.len() {
                let xf = &xs[xi];
                let yp = position(&y_pos, &xf.selector);
                if yp == 0 {
                    break;
                }
                // When yp != xi + 1 the declaration orders disagree and the
                // merge stays best-effort.
                y_pos.insert(&xf.selector, 0);
                x_pos.insert(&xf.selector, 0);
                xi += 1;
                let yf = &ys[yp - 1];
                drain_log!("struct match: {}", xf.selector);

                if self.profile.ignores_optional() {
                    if xf.optional && yf.optional {
                        continue;
                    }
                    if xf.optional {
                        // only x's side is optional: treat it as absent, so
                        // y's subtree reads as newly created
                        self.record_subtree(ChangeType::Create, yf);
                        changed = true;
                        continue;
                    }
                }

                if (xf.is_definition() && self.profile.ignores_definitions())
                    || (xf.is_hidden() && self.profile.ignores_hidden())
                {
                    continue;
                }

                let nested = self.at(xf.selector.clone(), |differ| {
                    differ.diff_value(&xf.value, &yf.value)
                })?;
                changed |= nested;
            }
        }

        Ok(changed)
    }

    fn skip_field(&self, field: &Field) -> bool {
        (field.optional && self.profile.ignores_optional())
            || (field.is_definition() && self.profile.ignores_definitions())
            || (field.is_hidden() && self.profile.ignores_hidden())
    }

    /// Appends one create/delete entry per node of the field's subtree,
    /// in pre-order.
    fn record_subtree(&mut self, change_type: ChangeType, field: &Field) {
        let base = self.path.child(field.selector.clone());
        field.value.walk(&base, &mut |path, value| {
            let (from, to) = match change_type {
                ChangeType::Delete => (Some(value.clone()), None),
                ChangeType::Create => (None, Some(value.clone())),
                ChangeType::Update => unreachable!("subtrees record creates and deletes only"),
            };
            self.changelog.add(change_type, path.clone(), from, to);
        });
    }
}
