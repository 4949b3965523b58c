use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the source content and filename so error factory functions do not
/// need them threaded through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a duplicate-name error.
    pub fn duplicate_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an unknown-record-reference error.
    pub fn unknown_record_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownRecord {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create a field-type error (missing or ambiguous type form).
    pub fn field_type_error(
        &self,
        field: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::FieldType {
            src: self.named_source(),
            span,
            field: field.into(),
            message: message.into(),
        })
    }

    /// Create a missing-discriminant error.
    pub fn missing_discriminant_error(
        &self,
        member: impl Into<String>,
        union: impl Into<String>,
        discriminant: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingDiscriminant {
            src: self.named_source(),
            span,
            member: member.into(),
            union_name: union.into(),
            discriminant: discriminant.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with -c/--config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse shapes.toml")]
    #[diagnostic(code(reshape::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate {context} '{name}'")]
    #[diagnostic(
        code(reshape::duplicate_name),
        help("names must be unique within their scope")
    )]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("unknown record '{name}' referenced by {context}")]
    #[diagnostic(
        code(reshape::unknown_record),
        help("records may only reference records defined earlier in the file")
    )]
    UnknownRecord {
        #[source_code]
        src: NamedSource<String>,
        #[label("no such record")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("field '{field}' {message}")]
    #[diagnostic(
        code(reshape::field_type),
        help("specify exactly one of: type, literal, record, returns")
    )]
    FieldType {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        field: String,
        message: String,
    },

    #[error("union member '{member}' has no literal '{discriminant}' field")]
    #[diagnostic(
        code(reshape::missing_discriminant),
        help(
            "every member of '{union_name}' must declare '{discriminant}' with a literal type, e.g. {{ name = \"{discriminant}\", literal = \"...\" }}"
        )
    )]
    MissingDiscriminant {
        #[source_code]
        src: NamedSource<String>,
        #[label("member declared here")]
        span: Option<SourceSpan>,
        member: String,
        union_name: String,
        discriminant: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, underscores, and dashes, starting with a letter or underscore."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
