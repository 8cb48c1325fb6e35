//! The evaluated configuration value tree
//!
//! Values are a closed sum type: whatever evaluates configuration source
//! (the snapshot loader, test builders) produces these nodes, and the diff
//! engine consumes them without ever touching source text.
//!
//! ## Concreteness
//!
//! Scalars, structs and lists are concrete: they denote exactly one data
//! point. Constraints, disjunctions and bottom are not - they restrict or
//! fail to denote a data point. The broad type category of any value is a
//! [`TypeClass`] mask, so a disjunction over `4 | int` and the plain
//! constraint `int` share the same category even though neither is the
//! same value.

use crate::artifacts::value::field::Field;
use crate::artifacts::value::kind::{Kind, TypeClass};
use crate::artifacts::value::path::{Path, Selector};
use std::fmt::Display;

/// A concrete single data point.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn class(&self) -> TypeClass {
        match self {
            Scalar::Null => TypeClass::NULL,
            Scalar::Bool(_) => TypeClass::BOOL,
            Scalar::Int(_) => TypeClass::INT,
            Scalar::Float(_) => TypeClass::FLOAT,
            Scalar::String(_) => TypeClass::STRING,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            // keep a decimal point so floats stay distinguishable from ints
            Scalar::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{:.1}", x),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => write!(f, "{:?}", s),
        }
    }
}

/// Comparison operator of a bound constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundOp {
    Greater,
    GreaterEq,
    Less,
    LessEq,
    NotEq,
}

impl Display for BoundOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            BoundOp::Greater => ">",
            BoundOp::GreaterEq => ">=",
            BoundOp::Less => "<",
            BoundOp::LessEq => "<=",
            BoundOp::NotEq => "!=",
        };
        write!(f, "{}", op)
    }
}

/// A non-concrete restriction on a data point.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// A type restriction, e.g. `int` or `number`
    Type(TypeClass),
    /// An order restriction relative to a scalar limit, e.g. `>2`
    Bound { op: BoundOp, limit: Scalar },
    /// A regular-expression restriction on strings, e.g. `=~"^a"`
    Pattern(String),
}

impl Constraint {
    pub fn class(&self) -> TypeClass {
        match self {
            Constraint::Type(class) => *class,
            // numeric bounds admit both int and float data points
            Constraint::Bound { limit, .. } if limit.class().intersects(TypeClass::NUMBER) => {
                TypeClass::NUMBER
            }
            Constraint::Bound { limit, .. } => limit.class(),
            Constraint::Pattern(_) => TypeClass::STRING,
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Type(class) => match class.keyword() {
                Some(keyword) => write!(f, "{}", keyword),
                None => {
                    let names: Vec<&str> =
                        class.iter().filter_map(|bit| bit.keyword()).collect();
                    write!(f, "({})", names.join("|"))
                }
            },
            Constraint::Bound { op, limit } => write!(f, "{}{}", op, limit),
            Constraint::Pattern(pattern) => write!(f, "=~{:?}", pattern),
        }
    }
}

/// A node of an evaluated configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Fields in declaration order; selectors are unique within the struct
    Struct(Vec<Field>),
    /// Elements in positional order
    List(Vec<Value>),
    Constraint(Constraint),
    /// Alternative values, at most one marked as the preferred default
    Disjunction {
        branches: Vec<Value>,
        default: Option<usize>,
    },
    /// An erroneous value; the diagnostic replaces any data
    Bottom { message: String },
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn bool(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }

    pub fn int(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }

    pub fn float(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::String(s.into()))
    }

    pub fn struct_of(fields: impl IntoIterator<Item = Field>) -> Self {
        Value::Struct(fields.into_iter().collect())
    }

    pub fn list_of(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::List(elements.into_iter().collect())
    }

    pub fn type_constraint(class: TypeClass) -> Self {
        Value::Constraint(Constraint::Type(class))
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Value::Constraint(Constraint::Pattern(pattern.into()))
    }

    pub fn bound(op: BoundOp, limit: Scalar) -> Self {
        Value::Constraint(Constraint::Bound { op, limit })
    }

    pub fn disjunction(
        branches: impl IntoIterator<Item = Value>,
        default: Option<usize>,
    ) -> Self {
        Value::Disjunction {
            branches: branches.into_iter().collect(),
            default,
        }
    }

    pub fn bottom(message: impl Into<String>) -> Self {
        Value::Bottom {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Scalar(_) => Kind::Scalar,
            Value::Struct(_) => Kind::Struct,
            Value::List(_) => Kind::List,
            Value::Bottom { .. } => Kind::Bottom,
            Value::Constraint(_) | Value::Disjunction { .. } => Kind::Constraint,
        }
    }

    /// The broad type category ("incomplete kind") of this value.
    pub fn class(&self) -> TypeClass {
        match self {
            Value::Scalar(scalar) => scalar.class(),
            Value::Struct(_) => TypeClass::STRUCT,
            Value::List(_) => TypeClass::LIST,
            Value::Constraint(constraint) => constraint.class(),
            Value::Disjunction { branches, .. } => branches
                .iter()
                .fold(TypeClass::empty(), |acc, branch| acc | branch.class()),
            Value::Bottom { .. } => TypeClass::empty(),
        }
    }

    /// True iff the value denotes exactly one data point. Composite values
    /// are concrete at their own level even when children are not.
    pub fn is_concrete(&self) -> bool {
        matches!(
            self,
            Value::Scalar(_) | Value::Struct(_) | Value::List(_)
        )
    }

    /// Resolves a disjunction with a marked default to that branch,
    /// recursively. Idempotent on every other value, including
    /// disjunctions without a default.
    pub fn default(&self) -> &Value {
        match self {
            Value::Disjunction {
                branches,
                default: Some(index),
            } if *index < branches.len() => branches[*index].default(),
            _ => self,
        }
    }

    /// Depth-first pre-order traversal over this value and its
    /// descendants, yielding each node together with its path below
    /// `base`. Struct traversal descends into regular required fields;
    /// definition, hidden and optional members are not walked.
    pub fn walk<F>(&self, base: &Path, visit: &mut F)
    where
        F: FnMut(&Path, &Value),
    {
        visit(base, self);

        match self {
            Value::Struct(fields) => {
                for field in fields {
                    if field.is_definition() || field.is_hidden() || field.optional {
                        continue;
                    }
                    let path = base.child(field.selector.clone());
                    field.value.walk(&path, visit);
                }
            }
            Value::List(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    let path = base.child(Selector::Index(index));
                    element.walk(&path, visit);
                }
            }
            _ => {}
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Constraint> for Value {
    fn from(constraint: Constraint) -> Self {
        Value::Constraint(constraint)
    }
}

impl Display for Value {
    /// Compact one-line rendering, used for change snapshots.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(scalar) => write!(f, "{}", scalar),
            Value::Struct(fields) => {
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    let marker = if field.optional { "?" } else { "" };
                    write!(f, "{}{}: {}", field.selector, marker, field.value)?;
                }
                write!(f, "}}")
            }
            Value::List(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Constraint(constraint) => write!(f, "{}", constraint),
            Value::Disjunction { branches, default } => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    if Some(i) == *default {
                        write!(f, "*")?;
                    }
                    write!(f, "{}", branch)?;
                }
                Ok(())
            }
            Value::Bottom { message } => write!(f, "_|_({})", message),
        }
    }
}
