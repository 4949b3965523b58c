//! Case transforms for derived field names.

/// Uppercase the first character (e.g., "name" -> "Name")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Name" -> "name")
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("Name"), "Name");
        assert_eq!(capitalize("hello, world"), "Hello, world");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_uncapitalize() {
        assert_eq!(uncapitalize("HELLO WORLD"), "hELLO WORLD");
        assert_eq!(uncapitalize("Name"), "name");
        assert_eq!(uncapitalize("name"), "name");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_round_trip_on_ascii() {
        assert_eq!(uncapitalize(&capitalize("location")), "location");
    }
}
