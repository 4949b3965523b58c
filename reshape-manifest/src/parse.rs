//! Manifest parsing and post-deserialization validation.

use std::collections::HashSet;
use std::path::Path;

use crate::error::SourceContext;
use crate::validate::{find_name_span, is_reserved, validate_identifier};
use crate::{Error, FieldDef, RecordDef, Result, Schema, UnionDef};

impl Schema {
    /// Parse a shapes.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_shapes(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_shapes(content, filename)
    }
}

/// Parse and validate a manifest from content.
pub fn parse_shapes(content: &str, filename: &str) -> Result<Schema> {
    let ctx = SourceContext::new(content, filename);
    let schema: Schema = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_schema(&schema, &ctx)?;
    Ok(schema)
}

fn validate_schema(schema: &Schema, ctx: &SourceContext) -> Result<()> {
    let mut earlier: HashSet<&str> = HashSet::new();
    for record in &schema.records {
        validate_name(&record.name, "record", ctx)?;
        if !earlier.insert(&record.name) {
            return Err(ctx.duplicate_error(
                &record.name,
                "record",
                find_name_span(ctx.src(), &record.name),
            ));
        }
        validate_record(record, &earlier, ctx)?;
    }

    let mut union_names: HashSet<&str> = HashSet::new();
    for union in &schema.unions {
        validate_name(&union.name, "union", ctx)?;
        if !union_names.insert(&union.name) {
            return Err(ctx.duplicate_error(
                &union.name,
                "union",
                find_name_span(ctx.src(), &union.name),
            ));
        }
        validate_union(union, schema, ctx)?;
    }

    Ok(())
}

fn validate_record(record: &RecordDef, earlier: &HashSet<&str>, ctx: &SourceContext) -> Result<()> {
    let context = format!("field in '{}'", record.name);
    let mut names: HashSet<&str> = HashSet::new();
    for field in &record.fields {
        if let Some(reason) = validate_identifier(&field.name) {
            return Err(ctx.invalid_identifier_error(
                &field.name,
                &context,
                reason,
                find_name_span(ctx.src(), &field.name),
            ));
        }
        if !names.insert(&field.name) {
            return Err(ctx.duplicate_error(
                &field.name,
                &context,
                find_name_span(ctx.src(), &field.name),
            ));
        }
        validate_field_type(field, &record.name, earlier, ctx)?;
    }
    Ok(())
}

fn validate_field_type(
    field: &FieldDef,
    record_name: &str,
    earlier: &HashSet<&str>,
    ctx: &SourceContext,
) -> Result<()> {
    let span = find_name_span(ctx.src(), &field.name);
    let forms = [
        field.ty.is_some(),
        field.literal.is_some(),
        field.record.is_some(),
        field.returns.is_some(),
    ];
    match forms.iter().filter(|set| **set).count() {
        0 => {
            return Err(ctx.field_type_error(&field.name, "has no type", span));
        }
        1 => {}
        _ => {
            return Err(ctx.field_type_error(&field.name, "has more than one type form", span));
        }
    }

    if let Some(value) = &field.literal {
        if !matches!(
            value,
            toml::Value::String(_) | toml::Value::Integer(_) | toml::Value::Boolean(_)
        ) {
            return Err(ctx.field_type_error(
                &field.name,
                "has a literal that is not a string, integer, or boolean",
                span,
            ));
        }
    }

    if let Some(referenced) = &field.record {
        // Earlier-only references keep resolution a single forward pass
        // and rule out cycles.
        if !earlier.contains(referenced.as_str()) || referenced == record_name {
            return Err(ctx.unknown_record_error(
                referenced,
                format!("field '{}' in '{}'", field.name, record_name),
                find_name_span(ctx.src(), referenced),
            ));
        }
    }

    Ok(())
}

fn validate_union(union: &UnionDef, schema: &Schema, ctx: &SourceContext) -> Result<()> {
    for member in &union.members {
        let Some(record) = schema.record(member) else {
            return Err(ctx.unknown_record_error(
                member,
                format!("union '{}'", union.name),
                find_name_span(ctx.src(), member),
            ));
        };

        let has_literal_tag = record
            .field(&union.discriminant)
            .is_some_and(|f| f.literal.is_some());
        if !has_literal_tag {
            return Err(ctx.missing_discriminant_error(
                member,
                &union.name,
                &union.discriminant,
                find_name_span(ctx.src(), member),
            ));
        }
    }
    Ok(())
}

fn validate_name(name: &str, kind: &str, ctx: &SourceContext) -> Result<()> {
    if is_reserved(name) {
        return Err(ctx.invalid_identifier_error(
            name,
            kind,
            format!("'{}' is reserved in TypeScript", name),
            find_name_span(ctx.src(), name),
        ));
    }
    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.invalid_identifier_error(
            name,
            kind,
            reason,
            find_name_span(ctx.src(), name),
        ));
    }
    Ok(())
}
