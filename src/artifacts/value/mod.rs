//! Evaluated configuration values
//!
//! - `kind`: value classification and the broad type-category mask
//! - `path`: selectors and tree locations
//! - `field`: struct members and their visibility markers
//! - `value`: the value tree itself (scalars, structs, lists, constraints,
//!   disjunctions, bottom)

pub mod field;
pub mod kind;
pub mod path;
pub mod value;
