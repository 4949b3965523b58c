//! Narrowing a set of tagged variants by discriminant.

use reshape_ir::{Field, Literal, RecordType, TypeRef};

/// How a variant set is matched against a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrowMode {
    /// Each variant is inspected independently and the matches are
    /// re-unioned. This is the usual behavior.
    Distributive,
    /// The whole set is treated as one compound type: it matches only when
    /// every member carries the tag, and the result is the projection of
    /// fields common to all members (types unioned). A mixed-tag set never
    /// matches in this mode.
    NonDistributive,
}

/// Outcome of [`narrow_by_discriminant`].
///
/// `NoMatch` is an expected result the caller handles, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrowed {
    /// Exactly one variant matched the tag.
    Single(RecordType),
    /// Several variants matched; input order preserved.
    Multiple(Vec<RecordType>),
    /// No variant carries the tag.
    NoMatch,
}

/// Select the variant(s) of a discriminated union whose `discriminant`
/// field carries exactly the literal `tag`.
///
/// Variants without a literal-typed discriminant field never match; they
/// are skipped, not reported. The whole operation is pure and total.
pub fn narrow_by_discriminant(
    variants: &[RecordType],
    discriminant: &str,
    tag: &Literal,
    mode: NarrowMode,
) -> Narrowed {
    match mode {
        NarrowMode::Distributive => {
            let mut matches: Vec<RecordType> = variants
                .iter()
                .filter(|v| tag_of(v, discriminant) == Some(tag))
                .cloned()
                .collect();
            match matches.len() {
                0 => Narrowed::NoMatch,
                1 => Narrowed::Single(matches.remove(0)),
                _ => Narrowed::Multiple(matches),
            }
        }
        NarrowMode::NonDistributive => {
            if variants.is_empty()
                || !variants.iter().all(|v| tag_of(v, discriminant) == Some(tag))
            {
                return Narrowed::NoMatch;
            }
            Narrowed::Single(project_common(variants))
        }
    }
}

/// The literal carried by a variant's discriminant field, if any.
fn tag_of<'a>(variant: &'a RecordType, discriminant: &str) -> Option<&'a Literal> {
    match variant.field(discriminant) {
        Some(Field {
            ty: TypeRef::Literal(lit),
            ..
        }) => Some(lit),
        _ => None,
    }
}

/// Project a variant set onto the fields every member declares.
///
/// Field order follows the first member. A projected field's type is the
/// union of the member types (deduplicated, collapsed when singular); its
/// modifiers are the union of the member modifiers.
fn project_common(variants: &[RecordType]) -> RecordType {
    let (first, rest) = match variants.split_first() {
        Some(split) => split,
        None => return RecordType::default(),
    };

    let mut fields = Vec::new();
    'next_field: for field in &first.fields {
        let mut types = vec![field.ty.clone()];
        let mut optional = field.optional;
        let mut readonly = field.readonly;
        for variant in rest {
            let Some(other) = variant.field(&field.name) else {
                continue 'next_field;
            };
            if !types.contains(&other.ty) {
                types.push(other.ty.clone());
            }
            optional |= other.optional;
            readonly |= other.readonly;
        }

        let ty = if types.len() == 1 {
            types.remove(0)
        } else {
            TypeRef::Union(types)
        };
        fields.push(Field {
            name: field.name.clone(),
            ty,
            optional,
            readonly,
        });
    }

    RecordType::new(fields)
}
