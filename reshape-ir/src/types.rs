//! Type references and literal types.

use serde::{Deserialize, Serialize};

use crate::RecordType;

/// A literal type, e.g. `"circle"`, `42`, or `true`.
///
/// Literals are what discriminant tags and capability markers are made of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// Reference to a field's type.
///
/// Mostly opaque to the transform engine: rules pass it through untouched
/// unless they explicitly rewrap it ([`TypeRef::Callable`] for getter
/// synthesis) or inspect it (capability predicates over nested records).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    /// Opaque named reference, e.g. "string", "number", "Person".
    Named(String),
    /// A literal type, e.g. the `"square"` in `kind: "square"`.
    Literal(Literal),
    /// Zero-argument callable returning another type, e.g. `() => string`.
    Callable(Box<TypeRef>),
    /// Inline record shape.
    Record(RecordType),
    /// Union of alternatives, e.g. `string | number`.
    Union(Vec<TypeRef>),
}

impl TypeRef {
    /// Named reference shorthand.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// String literal shorthand.
    pub fn literal_str(value: impl Into<String>) -> Self {
        TypeRef::Literal(Literal::Str(value.into()))
    }

    /// Wrap a type as a zero-argument callable returning it.
    pub fn callable(returns: TypeRef) -> Self {
        TypeRef::Callable(Box::new(returns))
    }

    /// The result type if this is a callable.
    ///
    /// Runtime counterpart of return-type extraction: `() => string` yields
    /// `string`, anything that is not a callable yields `None`.
    pub fn return_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Callable(returns) => Some(returns),
            _ => None,
        }
    }

    /// Check whether this type is a record carrying a literal `true` field
    /// with the given name (e.g. `{ type: string, pii: true }` for "pii").
    pub fn has_bool_tag(&self, tag: &str) -> bool {
        match self {
            TypeRef::Record(record) => record
                .field(tag)
                .is_some_and(|f| f.ty == TypeRef::Literal(Literal::Bool(true))),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn test_return_type() {
        let getter = TypeRef::callable(TypeRef::named("string"));
        assert_eq!(getter.return_type(), Some(&TypeRef::named("string")));
        assert_eq!(TypeRef::named("string").return_type(), None);
    }

    #[test]
    fn test_has_bool_tag() {
        let tagged = TypeRef::Record(RecordType::new(vec![
            Field::new("type", TypeRef::named("string")),
            Field::new("pii", TypeRef::Literal(Literal::Bool(true))),
        ]));
        let untagged = TypeRef::Record(RecordType::new(vec![Field::new(
            "format",
            TypeRef::literal_str("incrementing"),
        )]));

        assert!(tagged.has_bool_tag("pii"));
        assert!(!untagged.has_bool_tag("pii"));
        assert!(!TypeRef::named("string").has_bool_tag("pii"));
    }
}
