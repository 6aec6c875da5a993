//! Schema type nodes.
//!
//! - `TypeNode` enum: the sum type of all node kinds
//! - Individual structs: `StrType`, `NumType`, `ObjType`, etc.
//! - `TypeBuilder`: factory for constructing `TypeNode` values

pub mod builder;
pub mod classes;

pub use builder::TypeBuilder;
pub use classes::*;

/// Any schema node; each variant wraps its constraint-carrying class.
#[derive(Debug, Clone)]
pub enum TypeNode {
    Any(AnyType),
    Bool(BoolType),
    Num(NumType),
    Str(StrType),
    Date(DateType),
    BigInt(BigIntType),
    Enum(EnumType),
    Con(ConType),
    Arr(ArrType),
    Obj(ObjType),
    Or(OrType),
}

impl TypeNode {
    /// Returns the kind string of the wrapped class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any(t) => t.kind(),
            Self::Bool(t) => t.kind(),
            Self::Num(t) => t.kind(),
            Self::Str(t) => t.kind(),
            Self::Date(t) => t.kind(),
            Self::BigInt(t) => t.kind(),
            Self::Enum(t) => t.kind(),
            Self::Con(t) => t.kind(),
            Self::Arr(t) => t.kind(),
            Self::Obj(t) => t.kind(),
            Self::Or(t) => t.kind(),
        }
    }

    pub fn as_obj(&self) -> Option<&ObjType> {
        match self {
            Self::Obj(t) => Some(t),
            _ => None,
        }
    }
}

macro_rules! impl_from_class {
    ($($variant:ident($class:ty)),+ $(,)?) => {
        $(
            impl From<$class> for TypeNode {
                fn from(t: $class) -> Self {
                    Self::$variant(t)
                }
            }
        )+
    };
}

impl_from_class! {
    Any(AnyType),
    Bool(BoolType),
    Num(NumType),
    Str(StrType),
    Date(DateType),
    BigInt(BigIntType),
    Enum(EnumType),
    Con(ConType),
    Arr(ArrType),
    Obj(ObjType),
    Or(OrType),
}
