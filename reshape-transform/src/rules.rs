//! The standard transform rules.
//!
//! Each rule is a small value implementing [`TransformRule`]; apply it with
//! [`transform`](crate::transform). The names follow what the rules do to a
//! record shape: toggle a modifier uniformly, keep or drop fields by name,
//! derive new field names, or extract fields by a type capability.

use indexmap::IndexSet;
use reshape_core::{capitalize, uncapitalize};
use reshape_ir::{Field, Literal, TypeRef};

use crate::TransformRule;

/// Mark every field optional (the `Partial` shape).
pub struct MakeAllOptional;

impl TransformRule for MakeAllOptional {
    fn apply(&self, field: &Field) -> Option<Field> {
        Some(Field {
            optional: true,
            ..field.clone()
        })
    }
}

/// Mark every field required (the `Required`/`Concrete` shape).
pub struct MakeAllRequired;

impl TransformRule for MakeAllRequired {
    fn apply(&self, field: &Field) -> Option<Field> {
        Some(Field {
            optional: false,
            ..field.clone()
        })
    }
}

/// Mark every field read-only (the `Readonly` shape).
pub struct MakeAllReadonly;

impl TransformRule for MakeAllReadonly {
    fn apply(&self, field: &Field) -> Option<Field> {
        Some(Field {
            readonly: true,
            ..field.clone()
        })
    }
}

/// Strip the read-only modifier from every field (the `CreateMutable` shape).
pub struct MakeAllMutable;

impl TransformRule for MakeAllMutable {
    fn apply(&self, field: &Field) -> Option<Field> {
        Some(Field {
            readonly: false,
            ..field.clone()
        })
    }
}

/// Keep only the named fields, unchanged (the `Pick` shape).
pub struct PickByName {
    names: IndexSet<String>,
}

impl PickByName {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl TransformRule for PickByName {
    fn apply(&self, field: &Field) -> Option<Field> {
        self.names.contains(&field.name).then(|| field.clone())
    }
}

/// Drop the named fields, keep the rest unchanged (the `Omit` shape).
pub struct OmitByName {
    names: IndexSet<String>,
}

impl OmitByName {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl TransformRule for OmitByName {
    fn apply(&self, field: &Field) -> Option<Field> {
        (!self.names.contains(&field.name)).then(|| field.clone())
    }
}

/// Synthesize getters: prefix each name and rewrap its type as a
/// zero-argument callable returning the original type.
///
/// With `capitalize` set, `name` becomes `getName: () => string`. The
/// naming function is injective on distinct inputs, so applying this rule
/// to a well-formed record can never collide.
pub struct RenameWithPrefix {
    prefix: String,
    capitalize: bool,
}

impl RenameWithPrefix {
    pub fn new(prefix: impl Into<String>, capitalize: bool) -> Self {
        Self {
            prefix: prefix.into(),
            capitalize,
        }
    }
}

impl TransformRule for RenameWithPrefix {
    fn apply(&self, field: &Field) -> Option<Field> {
        let rest = if self.capitalize {
            capitalize(&field.name)
        } else {
            field.name.clone()
        };
        Some(
            field
                .renamed(format!("{}{}", self.prefix, rest))
                .retyped(TypeRef::callable(field.ty.clone())),
        )
    }
}

/// Append a suffix to each name, keeping the type (the `` `${Key}Changed` ``
/// event-key shape).
pub struct RenameWithSuffix {
    suffix: String,
}

impl RenameWithSuffix {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl TransformRule for RenameWithSuffix {
    fn apply(&self, field: &Field) -> Option<Field> {
        Some(field.renamed(format!("{}{}", field.name, self.suffix)))
    }
}

/// Intrinsic case transforms applied to field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    Upper,
    Lower,
    Capitalize,
    Uncapitalize,
}

impl CaseTransform {
    pub fn apply(&self, s: &str) -> String {
        match self {
            CaseTransform::Upper => s.to_uppercase(),
            CaseTransform::Lower => s.to_lowercase(),
            CaseTransform::Capitalize => capitalize(s),
            CaseTransform::Uncapitalize => uncapitalize(s),
        }
    }
}

/// Rename every field through a case transform.
///
/// Unlike [`RenameWithPrefix`] this is not injective in general: "ab" and
/// "AB" both uppercase to "AB", which the engine reports as a duplicate
/// output name.
pub struct ApplyCase(pub CaseTransform);

impl TransformRule for ApplyCase {
    fn apply(&self, field: &Field) -> Option<Field> {
        Some(field.renamed(self.0.apply(&field.name)))
    }
}

/// Keep only fields whose type satisfies a structural predicate, retyping
/// the survivors to the literal `true` marker (the `ExtractPII` shape).
pub struct FilterByCapability<P> {
    predicate: P,
}

impl<P> FilterByCapability<P>
where
    P: Fn(&TypeRef) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

/// [`FilterByCapability`] over records tagged with a literal `true` field,
/// e.g. `extract_tagged("pii")`.
pub fn extract_tagged(tag: &str) -> FilterByCapability<impl Fn(&TypeRef) -> bool + use<>> {
    let tag = tag.to_string();
    FilterByCapability::new(move |ty: &TypeRef| ty.has_bool_tag(&tag))
}

impl<P> TransformRule for FilterByCapability<P>
where
    P: Fn(&TypeRef) -> bool,
{
    fn apply(&self, field: &Field) -> Option<Field> {
        (self.predicate)(&field.ty)
            .then(|| field.retyped(TypeRef::Literal(Literal::Bool(true))))
    }
}
