//! Parsing `--rule` specs from the command line.

use std::str::FromStr;

use reshape_transform::TransformRule;
use reshape_transform::rules::{
    ApplyCase, CaseTransform, MakeAllMutable, MakeAllOptional, MakeAllReadonly, MakeAllRequired,
    OmitByName, PickByName, RenameWithPrefix, RenameWithSuffix, extract_tagged,
};

/// A rule selected on the command line, e.g. `partial`, `pick:name,age`,
/// `getters:get`, or `case:upper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    Partial,
    Required,
    Readonly,
    Mutable,
    Pick(Vec<String>),
    Omit(Vec<String>),
    Getters { prefix: String },
    Suffix(String),
    Case(CaseTransform),
    Tagged(String),
}

impl RuleSpec {
    /// Build the transform rule this spec names.
    pub fn into_rule(self) -> Box<dyn TransformRule> {
        match self {
            RuleSpec::Partial => Box::new(MakeAllOptional),
            RuleSpec::Required => Box::new(MakeAllRequired),
            RuleSpec::Readonly => Box::new(MakeAllReadonly),
            RuleSpec::Mutable => Box::new(MakeAllMutable),
            RuleSpec::Pick(names) => Box::new(PickByName::new(names)),
            RuleSpec::Omit(names) => Box::new(OmitByName::new(names)),
            RuleSpec::Getters { prefix } => Box::new(RenameWithPrefix::new(prefix, true)),
            RuleSpec::Suffix(suffix) => Box::new(RenameWithSuffix::new(suffix)),
            RuleSpec::Case(case) => Box::new(ApplyCase(case)),
            RuleSpec::Tagged(tag) => Box::new(extract_tagged(&tag)),
        }
    }
}

impl FromStr for RuleSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let rule = match (name, arg) {
            ("partial", None) => RuleSpec::Partial,
            ("required", None) => RuleSpec::Required,
            ("readonly", None) => RuleSpec::Readonly,
            ("mutable", None) => RuleSpec::Mutable,
            ("pick", Some(names)) => RuleSpec::Pick(split_names(names)?),
            ("omit", Some(names)) => RuleSpec::Omit(split_names(names)?),
            ("getters", None) => RuleSpec::Getters {
                prefix: "get".to_string(),
            },
            ("getters", Some(prefix)) if !prefix.is_empty() => RuleSpec::Getters {
                prefix: prefix.to_string(),
            },
            ("suffix", Some(suffix)) if !suffix.is_empty() => {
                RuleSpec::Suffix(suffix.to_string())
            }
            ("case", Some("upper")) => RuleSpec::Case(CaseTransform::Upper),
            ("case", Some("lower")) => RuleSpec::Case(CaseTransform::Lower),
            ("case", Some("capitalize")) => RuleSpec::Case(CaseTransform::Capitalize),
            ("case", Some("uncapitalize")) => RuleSpec::Case(CaseTransform::Uncapitalize),
            ("tagged", Some(tag)) if !tag.is_empty() => RuleSpec::Tagged(tag.to_string()),
            _ => {
                return Err(format!(
                    "unknown rule '{}' (expected one of: partial, required, readonly, mutable, \
                     pick:<names>, omit:<names>, getters[:prefix], suffix:<text>, \
                     case:<upper|lower|capitalize|uncapitalize>, tagged:<tag>)",
                    s
                ));
            }
        };
        Ok(rule)
    }
}

fn split_names(names: &str) -> Result<Vec<String>, String> {
    let names: Vec<String> = names
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect();
    if names.is_empty() {
        return Err("expected at least one field name, e.g. pick:name,age".to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_rules() {
        assert_eq!("partial".parse::<RuleSpec>().unwrap(), RuleSpec::Partial);
        assert_eq!("readonly".parse::<RuleSpec>().unwrap(), RuleSpec::Readonly);
        assert_eq!("mutable".parse::<RuleSpec>().unwrap(), RuleSpec::Mutable);
    }

    #[test]
    fn test_parse_pick_and_omit() {
        assert_eq!(
            "pick:name,age".parse::<RuleSpec>().unwrap(),
            RuleSpec::Pick(vec!["name".into(), "age".into()])
        );
        assert_eq!(
            "omit: kind ".parse::<RuleSpec>().unwrap(),
            RuleSpec::Omit(vec!["kind".into()])
        );
        assert!("pick:".parse::<RuleSpec>().is_err());
    }

    #[test]
    fn test_parse_getters_prefix() {
        assert_eq!(
            "getters".parse::<RuleSpec>().unwrap(),
            RuleSpec::Getters {
                prefix: "get".into()
            }
        );
        assert_eq!(
            "getters:fetch".parse::<RuleSpec>().unwrap(),
            RuleSpec::Getters {
                prefix: "fetch".into()
            }
        );
    }

    #[test]
    fn test_parse_case() {
        assert_eq!(
            "case:upper".parse::<RuleSpec>().unwrap(),
            RuleSpec::Case(CaseTransform::Upper)
        );
        assert!("case:title".parse::<RuleSpec>().is_err());
    }

    #[test]
    fn test_unknown_rule_lists_the_vocabulary() {
        let err = "frobnicate".parse::<RuleSpec>().unwrap_err();
        assert!(err.contains("unknown rule 'frobnicate'"));
        assert!(err.contains("getters[:prefix]"));
    }
}
