use std::fmt::Display;

/// A single step into a value tree: a struct field or a list position.
///
/// Definition and hidden fields live in their own selector namespaces, so
/// `#a`, `_a` and `a` may coexist within one struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    /// Regular struct field
    Field(String),
    /// Definition field, rendered with a `#` marker
    Definition(String),
    /// Hidden field, rendered with a `_` marker
    Hidden(String),
    /// List element position
    Index(usize),
}

impl Selector {
    pub fn field(name: impl Into<String>) -> Self {
        Selector::Field(name.into())
    }

    pub fn definition(name: impl Into<String>) -> Self {
        Selector::Definition(name.into())
    }

    pub fn hidden(name: impl Into<String>) -> Self {
        Selector::Hidden(name.into())
    }

    pub fn is_definition(&self) -> bool {
        matches!(self, Selector::Definition(_))
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Selector::Hidden(_))
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Field(name) => write!(f, "{}", name),
            Selector::Definition(name) => write!(f, "#{}", name),
            Selector::Hidden(name) => write!(f, "_{}", name),
            Selector::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// The location of a value within its owning tree, as an ordered sequence
/// of selectors. The empty path addresses the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Selector>);

impl Path {
    pub fn root() -> Self {
        Path::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.0
    }

    /// A new path one selector deeper.
    pub fn child(&self, selector: Selector) -> Self {
        let mut selectors = self.0.clone();
        selectors.push(selector);
        Path(selectors)
    }

    pub(crate) fn push(&mut self, selector: Selector) {
        self.0.push(selector);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl From<Vec<Selector>> for Path {
    fn from(selectors: Vec<Selector>) -> Self {
        Path(selectors)
    }
}

impl Display for Path {
    /// Dotted field selectors with bracketed indices: `a.b[2].c`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, selector) in self.0.iter().enumerate() {
            if i > 0 && !matches!(selector, Selector::Index(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}
