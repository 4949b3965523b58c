//! The structural transform engine.

use indexmap::IndexSet;
use reshape_ir::{Field, RecordType};

use crate::{Result, TransformError};

/// A per-field rewrite rule.
///
/// Applied independently to each field of a record, in declaration order.
/// Returning `None` omits the field from the output; returning a
/// replacement field may change its name, type, or modifiers.
pub trait TransformRule {
    fn apply(&self, field: &Field) -> Option<Field>;
}

/// Adapter turning a closure into a rule, for one-off transforms that do
/// not warrant a named rule type.
pub struct RuleFn<F>(pub F);

impl<F> TransformRule for RuleFn<F>
where
    F: Fn(&Field) -> Option<Field>,
{
    fn apply(&self, field: &Field) -> Option<Field> {
        (self.0)(field)
    }
}

/// Apply a rule to every field of a record, in declaration order.
///
/// A stable filter+map: retained fields keep their relative order, nothing
/// is sorted or reordered. Output names must stay pairwise distinct;
/// a collision fails with [`TransformError::DuplicateFieldName`].
pub fn transform(source: &RecordType, rule: &dyn TransformRule) -> Result<RecordType> {
    let mut seen: IndexSet<String> = IndexSet::with_capacity(source.len());
    let mut fields = Vec::with_capacity(source.len());

    for field in &source.fields {
        let Some(out) = rule.apply(field) else {
            continue;
        };
        if !seen.insert(out.name.clone()) {
            return Err(TransformError::DuplicateFieldName { name: out.name });
        }
        fields.push(out);
    }

    Ok(RecordType::new(fields))
}

#[cfg(test)]
mod tests {
    use reshape_ir::TypeRef;

    use super::*;

    fn sample() -> RecordType {
        RecordType::new(vec![
            Field::new("name", TypeRef::named("string")),
            Field::new("age", TypeRef::named("number")),
            Field::new("alive", TypeRef::named("boolean")),
        ])
    }

    #[test]
    fn test_identity_closure_preserves_order() {
        let source = sample();
        let out = transform(&source, &RuleFn(|f: &Field| Some(f.clone()))).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_omitting_rule_is_a_stable_filter() {
        let source = sample();
        let rule = RuleFn(|f: &Field| (f.name != "age").then(|| f.clone()));
        let out = transform(&source, &rule).unwrap();
        let names: Vec<&str> = out.names().collect();
        assert_eq!(names, vec!["name", "alive"]);
    }

    #[test]
    fn test_colliding_rename_is_rejected() {
        let source = sample();
        let rule = RuleFn(|f: &Field| Some(f.renamed("same")));
        let err = transform(&source, &rule).unwrap_err();
        assert_eq!(
            err,
            TransformError::DuplicateFieldName {
                name: "same".into()
            }
        );
    }

    #[test]
    fn test_omitted_fields_do_not_count_as_collisions() {
        let source = sample();
        // "age" is dropped, so renaming "alive" to "age" is fine.
        let rule = RuleFn(|f: &Field| match f.name.as_str() {
            "age" => None,
            "alive" => Some(f.renamed("age")),
            _ => Some(f.clone()),
        });
        let out = transform(&source, &rule).unwrap();
        let names: Vec<&str> = out.names().collect();
        assert_eq!(names, vec!["name", "age"]);
    }
}
