//! Factory for constructing `TypeNode` values.

use super::classes::*;
use super::TypeNode;
use crate::value::Value;

/// Factory for constructing [`TypeNode`] instances.
///
/// ```
/// use search_params_type::type_def::{KeyType, ObjType, TypeBuilder};
///
/// let t = TypeBuilder::new();
/// let schema = ObjType::new(vec![
///     KeyType::new("q", t.str()),
///     KeyType::new("tags", t.Array(t.str())),
/// ]);
/// assert_eq!(schema.keys.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeBuilder;

#[allow(non_snake_case)]
impl TypeBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand getters

    pub fn any(&self) -> TypeNode {
        TypeNode::Any(AnyType::new())
    }

    pub fn bool(&self) -> TypeNode {
        TypeNode::Bool(BoolType::new())
    }

    pub fn num(&self) -> TypeNode {
        TypeNode::Num(NumType::new())
    }

    pub fn int(&self) -> TypeNode {
        TypeNode::Num(NumType::new().int())
    }

    pub fn str(&self) -> TypeNode {
        TypeNode::Str(StrType::new())
    }

    pub fn date(&self) -> TypeNode {
        TypeNode::Date(DateType::new())
    }

    pub fn bigint(&self) -> TypeNode {
        TypeNode::BigInt(BigIntType::new())
    }

    pub fn nil(&self) -> TypeNode {
        self.Const(Value::Null)
    }

    // ------------------------------------------------------------------
    // Factory methods

    pub fn Array(&self, type_: TypeNode) -> TypeNode {
        TypeNode::Arr(ArrType::new(type_))
    }

    pub fn Object(&self, keys: Vec<KeyType>) -> TypeNode {
        TypeNode::Obj(ObjType::new(keys))
    }

    pub fn Or(&self, types: Vec<TypeNode>) -> TypeNode {
        TypeNode::Or(OrType::new(types))
    }

    pub fn Const(&self, value: impl Into<Value>) -> TypeNode {
        TypeNode::Con(ConType::new(value))
    }

    pub fn Enum<I, S>(&self, values: I) -> TypeNode
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeNode::Enum(EnumType::new(values))
    }

    /// `T | null`.
    pub fn Nullable(&self, type_: TypeNode) -> TypeNode {
        self.Or(vec![type_, self.nil()])
    }
}
