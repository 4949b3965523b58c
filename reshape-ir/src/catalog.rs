//! Named records and unions lowered from a manifest.

use serde::{Deserialize, Serialize};

use crate::RecordType;

/// A record shape together with the name it was declared under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub name: String,
    pub shape: RecordType,
}

/// A discriminated union of record shapes.
///
/// Each variant is expected to carry a literal type on its `discriminant`
/// field; the manifest validator rejects unions whose members do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedUnion {
    pub name: String,
    /// Name of the tag field, e.g. "kind".
    pub discriminant: String,
    pub variants: Vec<NamedRecord>,
}

/// Everything a manifest declares, lowered and ready to transform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub records: Vec<NamedRecord>,
    pub unions: Vec<NamedUnion>,
}

impl Catalog {
    /// Look up a record by declared name.
    pub fn record(&self, name: &str) -> Option<&NamedRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Look up a union by declared name.
    pub fn union(&self, name: &str) -> Option<&NamedUnion> {
        self.unions.iter().find(|u| u.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.unions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, TypeRef};

    #[test]
    fn test_lookup() {
        let catalog = Catalog {
            records: vec![NamedRecord {
                name: "person".into(),
                shape: RecordType::new(vec![Field::new("name", TypeRef::named("string"))]),
            }],
            unions: Vec::new(),
        };

        assert!(catalog.record("person").is_some());
        assert!(catalog.record("animal").is_none());
        assert!(catalog.union("person").is_none());
        assert!(!catalog.is_empty());
    }
}
