//! Fields and record-type descriptions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// One named, typed field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within its record.
    pub name: String,
    /// The field's type.
    pub ty: TypeRef,
    /// Whether the field may be absent.
    pub optional: bool,
    /// Whether the field is read-only.
    pub readonly: bool,
}

impl Field {
    /// Create a required, mutable field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            readonly: false,
        }
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the field read-only.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Copy of this field under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy of this field with a different type.
    pub fn retyped(&self, ty: TypeRef) -> Self {
        Self {
            ty,
            ..self.clone()
        }
    }
}

/// The shape of a structural record type: an ordered list of fields.
///
/// Field names are unique within a record. The types here are plain data,
/// so the invariant is enforced where records are produced (manifest
/// validation, the transform engine); [`RecordType::duplicate_name`] is the
/// check both of them use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordType {
    pub fields: Vec<Field>,
}

impl RecordType {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterate over field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// First field name that appears more than once, if any.
    pub fn duplicate_name(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        self.fields
            .iter()
            .find(|f| !seen.insert(f.name.as_str()))
            .map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> RecordType {
        RecordType::new(vec![
            Field::new("name", TypeRef::named("string")),
            Field::new("age", TypeRef::named("number")).optional(),
            Field::new("id", TypeRef::named("string")).readonly(),
        ])
    }

    #[test]
    fn test_field_lookup() {
        let record = person();
        assert_eq!(record.field("age").map(|f| f.optional), Some(true));
        assert_eq!(record.field("id").map(|f| f.readonly), Some(true));
        assert!(record.field("missing").is_none());
    }

    #[test]
    fn test_names_in_declaration_order() {
        let record = person();
        let names: Vec<&str> = record.names().collect();
        assert_eq!(names, vec!["name", "age", "id"]);
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(person().duplicate_name(), None);

        let clashing = RecordType::new(vec![
            Field::new("x", TypeRef::named("number")),
            Field::new("y", TypeRef::named("number")),
            Field::new("x", TypeRef::named("string")),
        ]);
        assert_eq!(clashing.duplicate_name(), Some("x"));
    }

    #[test]
    fn test_renamed_keeps_modifiers() {
        let field = Field::new("age", TypeRef::named("number"))
            .optional()
            .readonly();
        let renamed = field.renamed("years");
        assert_eq!(renamed.name, "years");
        assert!(renamed.optional);
        assert!(renamed.readonly);
        assert_eq!(renamed.ty, field.ty);
    }
}
