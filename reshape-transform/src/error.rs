use thiserror::Error;

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A rule mapped two distinct input fields onto the same output name.
    ///
    /// This is a bug in the rule, not in its input: names derived from
    /// distinct input names through an injective function can never
    /// collide. It is surfaced immediately rather than resolved by
    /// overwriting.
    #[error("transform produced duplicate field name '{name}'")]
    DuplicateFieldName { name: String },
}
