use crate::artifacts::value::path::Path;
use crate::artifacts::value::value::Value;
use bitflags::bitflags;
use colored::Colorize;
use derive_new::new;
use std::fmt::Display;

/// What happened to the node at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Create,
    Update,
    Delete,
}

impl ChangeType {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Create => "create",
            ChangeType::Update => "update",
            ChangeType::Delete => "delete",
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            ChangeType::Create => 'C',
            ChangeType::Update => 'U',
            ChangeType::Delete => 'D',
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ChangeFilter: u32 {
        const CREATE = 0b001;
        const UPDATE = 0b010;
        const DELETE = 0b100;
    }
}

impl ChangeFilter {
    /// Parses a letter set like `CD`; `None` on any unknown letter.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'C' => filter |= Self::CREATE,
                'U' => filter |= Self::UPDATE,
                'D' => filter |= Self::DELETE,
                _ => return None,
            }
        }

        Some(filter)
    }
}

/// One entry of the edit script.
///
/// `from` is populated for updates and deletes, `to` for updates and
/// creates; an absent side renders as `<nil>`.
#[derive(Debug, Clone, PartialEq, new)]
pub struct Change {
    pub change_type: ChangeType,
    pub path: Path,
    pub from: Option<Value>,
    pub to: Option<Value>,
}

impl Change {
    pub fn matches_filter(&self, filter: ChangeFilter) -> bool {
        match self.change_type {
            ChangeType::Create => filter.contains(ChangeFilter::CREATE),
            ChangeType::Update => filter.contains(ChangeFilter::UPDATE),
            ChangeType::Delete => filter.contains(ChangeFilter::DELETE),
        }
    }

    /// The rendered path, with the root spelled out.
    pub fn path_label(&self) -> String {
        if self.path.is_root() {
            "<root>".to_string()
        } else {
            self.path.to_string()
        }
    }

    fn side_label(side: &Option<Value>) -> String {
        match side {
            Some(value) => value.to_string(),
            None => "<nil>".to_string(),
        }
    }

    pub fn from_label(&self) -> String {
        Change::side_label(&self.from)
    }

    pub fn to_label(&self) -> String {
        Change::side_label(&self.to)
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.change_type {
            ChangeType::Create => self.change_type.label().green(),
            ChangeType::Update => self.change_type.label().yellow(),
            ChangeType::Delete => self.change_type.label().red(),
        };
        write!(
            f,
            "{} {}: {} -> {}",
            label,
            self.path_label(),
            self.from_label(),
            self.to_label()
        )
    }
}

/// The edit script of one diff run: an append-only sequence of changes in
/// traversal discovery order. Created per invocation and never mutated
/// after being handed to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changelog(Vec<Change>);

impl Changelog {
    pub fn new() -> Self {
        Changelog::default()
    }

    pub(crate) fn add(
        &mut self,
        change_type: ChangeType,
        path: Path,
        from: Option<Value>,
        to: Option<Value>,
    ) {
        self.0.push(Change::new(change_type, path, from, to));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.0.iter()
    }

    pub fn changes(&self) -> &[Change] {
        &self.0
    }
}

impl IntoIterator for Changelog {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
