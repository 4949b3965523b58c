//! Rendering record descriptions as TypeScript-style interface text.

use std::fmt;

use crate::{Field, Literal, RecordType, TypeRef};

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "\"{}\"", s),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Literal(lit) => write!(f, "{}", lit),
            TypeRef::Callable(returns) => write!(f, "() => {}", returns),
            TypeRef::Record(record) => {
                if record.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, field) in record.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write_field(f, field)?;
                }
                f.write_str(" }")
            }
            TypeRef::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    // Callables bind looser than the union bar
                    match member {
                        TypeRef::Callable(_) => write!(f, "({})", member)?,
                        _ => write!(f, "{}", member)?,
                    }
                }
                Ok(())
            }
        }
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &Field) -> fmt::Result {
    if field.readonly {
        f.write_str("readonly ")?;
    }
    f.write_str(&field.name)?;
    if field.optional {
        f.write_str("?")?;
    }
    write!(f, ": {}", field.ty)
}

/// Render a record description as a TypeScript interface declaration.
pub fn render_interface(name: &str, record: &RecordType) -> String {
    use fmt::Write;

    if record.is_empty() {
        return format!("interface {} {{}}\n", name);
    }

    let mut out = String::new();
    let _ = writeln!(out, "interface {} {{", name);
    for field in &record.fields {
        let readonly = if field.readonly { "readonly " } else { "" };
        let optional = if field.optional { "?" } else { "" };
        let _ = writeln!(
            out,
            "  {}{}{}: {};",
            readonly, field.name, optional, field.ty
        );
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_interface() {
        let record = RecordType::new(vec![
            Field::new("id", TypeRef::named("string")).readonly(),
            Field::new("name", TypeRef::named("string")),
            Field::new("age", TypeRef::named("number")).optional(),
        ]);

        assert_eq!(
            render_interface("Person", &record),
            "interface Person {\n  readonly id: string;\n  name: string;\n  age?: number;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_interface() {
        assert_eq!(
            render_interface("Empty", &RecordType::default()),
            "interface Empty {}\n"
        );
    }

    #[test]
    fn test_type_display() {
        assert_eq!(
            TypeRef::callable(TypeRef::named("string")).to_string(),
            "() => string"
        );
        assert_eq!(TypeRef::literal_str("square").to_string(), "\"square\"");
        assert_eq!(TypeRef::Literal(Literal::Bool(true)).to_string(), "true");
        assert_eq!(
            TypeRef::Union(vec![
                TypeRef::named("string"),
                TypeRef::callable(TypeRef::named("void")),
            ])
            .to_string(),
            "string | (() => void)"
        );
    }

    #[test]
    fn test_nested_record_display() {
        let nested = TypeRef::Record(RecordType::new(vec![
            Field::new("type", TypeRef::named("string")),
            Field::new("pii", TypeRef::Literal(Literal::Bool(true))),
        ]));
        assert_eq!(nested.to_string(), "{ type: string; pii: true }");
    }
}
