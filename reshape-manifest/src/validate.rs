//! Identifier and span helpers for manifest validation.

use miette::SourceSpan;

/// TypeScript-side reserved words we refuse as record and union names,
/// since they become interface names in rendered output.
pub(crate) const TS_RESERVED: &[&str] = &[
    "any", "boolean", "class", "const", "enum", "export", "extends", "false", "function", "if",
    "import", "in", "instanceof", "interface", "let", "never", "new", "null", "number", "object",
    "readonly", "return", "string", "symbol", "this", "true", "type", "typeof", "undefined",
    "unknown", "var", "void",
];

pub(crate) fn is_reserved(name: &str) -> bool {
    TS_RESERVED.contains(&name)
}

/// Validate an identifier, returning a reason when it is invalid.
///
/// Dashes are allowed (e.g. "square-event"); they are cosmetic in the
/// manifest and never reach rendered field names unchanged.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name is empty");
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap_or_default();
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Some("name must start with a letter or underscore");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Some("name contains an invalid character");
    }

    None
}

/// Find the span of a name in the TOML source.
///
/// Our manifests declare names as `name = "value"` pairs (records, unions,
/// fields) or as quoted strings in `members` arrays, so those are the
/// patterns we search for. Better to have no span than a wrong one.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("name = {quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // The name starts after 'name = "'
            let start = pos + 8;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Quoted occurrence anywhere (union members, record references).
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("person"), None);
        assert_eq!(validate_identifier("square-event"), None);
        assert_eq!(validate_identifier("_hidden"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("9lives").is_some());
        assert!(validate_identifier("has space").is_some());
        assert!(validate_identifier("semi;colon").is_some());
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("interface"));
        assert!(is_reserved("readonly"));
        assert!(!is_reserved("person"));
    }

    #[test]
    fn test_find_name_span() {
        let src = "[[records]]\nname = \"person\"\nfields = []\n";
        let span = find_name_span(src, "person").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "person");
    }

    #[test]
    fn test_find_member_span() {
        let src = "[[unions]]\nname = \"shape\"\nmembers = [\"square\", \"circle\"]\n";
        let span = find_name_span(src, "circle").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "circle");
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("name = \"person\"", "animal").is_none());
    }
}
