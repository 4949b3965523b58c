//! Lowering a validated schema into the IR catalog.

use reshape_ir::{Catalog, Field, Literal, NamedRecord, NamedUnion, RecordType, TypeRef};

use crate::{FieldDef, RecordDef, Schema};

impl Schema {
    /// Lower the schema into a [`Catalog`] of record shapes and unions.
    ///
    /// Assumes a validated schema: record references resolve against
    /// records lowered earlier in the same pass, and unresolved names
    /// degrade to opaque [`TypeRef::Named`] references rather than
    /// failing.
    pub fn lower(&self) -> Catalog {
        let mut catalog = Catalog::default();

        for record in &self.records {
            let shape = lower_record(record, &catalog);
            catalog.records.push(NamedRecord {
                name: record.name.clone(),
                shape,
            });
        }

        for union in &self.unions {
            let variants = union
                .members
                .iter()
                .filter_map(|member| catalog.record(member).cloned())
                .collect();
            catalog.unions.push(NamedUnion {
                name: union.name.clone(),
                discriminant: union.discriminant.clone(),
                variants,
            });
        }

        catalog
    }
}

fn lower_record(record: &RecordDef, catalog: &Catalog) -> RecordType {
    RecordType::new(
        record
            .fields
            .iter()
            .map(|f| lower_field(f, catalog))
            .collect(),
    )
}

fn lower_field(field: &FieldDef, catalog: &Catalog) -> Field {
    let ty = if let Some(name) = &field.ty {
        TypeRef::Named(name.clone())
    } else if let Some(value) = &field.literal {
        TypeRef::Literal(lower_literal(value))
    } else if let Some(referenced) = &field.record {
        match catalog.record(referenced) {
            Some(named) => TypeRef::Record(named.shape.clone()),
            None => TypeRef::Named(referenced.clone()),
        }
    } else if let Some(returns) = &field.returns {
        TypeRef::callable(TypeRef::Named(returns.clone()))
    } else {
        // Validation rejects fields with no type form.
        TypeRef::named("unknown")
    };

    Field {
        name: field.name.clone(),
        ty,
        optional: field.optional,
        readonly: field.readonly,
    }
}

fn lower_literal(value: &toml::Value) -> Literal {
    match value {
        toml::Value::String(s) => Literal::Str(s.clone()),
        toml::Value::Integer(n) => Literal::Int(*n),
        toml::Value::Boolean(b) => Literal::Bool(*b),
        // Validation rejects other literal forms.
        other => Literal::Str(other.to_string()),
    }
}
