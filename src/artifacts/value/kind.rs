use bitflags::bitflags;

/// Five-way value classification driving the differ's dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Struct,
    List,
    /// An erroneous or unsatisfiable value carrying a diagnostic
    Bottom,
    /// A non-concrete restriction (type, bound, pattern, open disjunction)
    Constraint,
}

bitflags! {
    /// Broad type category of a value: the set of types it could still
    /// evaluate to. Concrete values map to a single bit; constraints and
    /// disjunctions may cover several; bottom covers none.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeClass: u16 {
        const NULL = 1;
        const BOOL = 1 << 1;
        const INT = 1 << 2;
        const FLOAT = 1 << 3;
        const STRING = 1 << 4;
        const STRUCT = 1 << 5;
        const LIST = 1 << 6;

        const NUMBER = Self::INT.bits() | Self::FLOAT.bits();
        const TOP = Self::NULL.bits()
            | Self::BOOL.bits()
            | Self::INT.bits()
            | Self::FLOAT.bits()
            | Self::STRING.bits()
            | Self::STRUCT.bits()
            | Self::LIST.bits();
    }
}

/// Source keywords denoting type constraints, as accepted by the snapshot
/// loader and emitted back when rendering.
pub const TYPE_KEYWORDS: phf::Map<&'static str, TypeClass> = phf::phf_map! {
    "null" => TypeClass::NULL,
    "bool" => TypeClass::BOOL,
    "int" => TypeClass::INT,
    "float" => TypeClass::FLOAT,
    "number" => TypeClass::NUMBER,
    "string" => TypeClass::STRING,
    "struct" => TypeClass::STRUCT,
    "list" => TypeClass::LIST,
    "_" => TypeClass::TOP,
};

impl TypeClass {
    /// The keyword for this exact class, if one exists (`NUMBER` renders as
    /// "number", not "int|float").
    pub fn keyword(&self) -> Option<&'static str> {
        TYPE_KEYWORDS
            .entries()
            .find(|(_, class)| **class == *self)
            .map(|(keyword, _)| *keyword)
    }
}
