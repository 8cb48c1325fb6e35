use crate::artifacts::value::path::Selector;
use crate::artifacts::value::value::Value;
use derive_new::new;

/// A single struct member. Declaration order of fields within a struct is
/// semantically meaningful and preserved by the owning `Vec<Field>`.
///
/// Definition/hidden classification is carried by the selector variant;
/// optionality is an orthogonal marker on top of it.
#[derive(Debug, Clone, PartialEq, new)]
pub struct Field {
    pub selector: Selector,
    pub value: Value,
    pub optional: bool,
}

impl Field {
    /// A regular, required field.
    pub fn regular(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Field::new(Selector::field(name), value.into(), false)
    }

    /// A definition field (`#name`).
    pub fn definition(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Field::new(Selector::definition(name), value.into(), false)
    }

    /// A hidden field (`_name`).
    pub fn hidden(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Field::new(Selector::hidden(name), value.into(), false)
    }

    /// The same field, marked optional.
    pub fn into_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn is_definition(&self) -> bool {
        self.selector.is_definition()
    }

    pub fn is_hidden(&self) -> bool {
        self.selector.is_hidden()
    }
}
