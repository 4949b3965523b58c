//! Set operations over union member lists.
//!
//! These mirror the exclusion/extraction utilities over unions of types:
//! membership is structural equality, order is preserved, and the input is
//! never mutated.

use reshape_ir::TypeRef;

/// Members of `union` that do not appear in `excluded`.
pub fn exclude(members: &[TypeRef], excluded: &[TypeRef]) -> Vec<TypeRef> {
    members
        .iter()
        .filter(|m| !excluded.contains(m))
        .cloned()
        .collect()
}

/// Members of `union` that also appear in `allowed`.
pub fn extract(members: &[TypeRef], allowed: &[TypeRef]) -> Vec<TypeRef> {
    members
        .iter()
        .filter(|m| allowed.contains(m))
        .cloned()
        .collect()
}

/// Members that are not `null` or `undefined`.
pub fn non_nullable(members: &[TypeRef]) -> Vec<TypeRef> {
    let nullable = [TypeRef::named("null"), TypeRef::named("undefined")];
    exclude(members, &nullable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(names: &[&str]) -> Vec<TypeRef> {
        names.iter().map(|n| TypeRef::literal_str(*n)).collect()
    }

    #[test]
    fn test_exclude() {
        let out = exclude(&literals(&["a", "b", "c"]), &literals(&["a"]));
        assert_eq!(out, literals(&["b", "c"]));

        let out = exclude(&literals(&["a", "b", "c"]), &literals(&["a", "b"]));
        assert_eq!(out, literals(&["c"]));
    }

    #[test]
    fn test_extract() {
        // Extraction keeps only members also named by the filter; "f" has
        // no counterpart in the union and contributes nothing.
        let out = extract(&literals(&["a", "b", "c"]), &literals(&["a", "f"]));
        assert_eq!(out, literals(&["a"]));
    }

    #[test]
    fn test_non_nullable() {
        let members = vec![
            TypeRef::named("string"),
            TypeRef::named("null"),
            TypeRef::named("number"),
            TypeRef::named("undefined"),
        ];
        assert_eq!(
            non_nullable(&members),
            vec![TypeRef::named("string"), TypeRef::named("number")]
        );
    }
}
