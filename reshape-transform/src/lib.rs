//! Structural transforms over record-type descriptions.
//!
//! The one operation everything else here specializes is [`transform`]: a
//! stable filter+map over the fields of a [`RecordType`], driven by a
//! [`TransformRule`]. The standard rules in [`rules`] cover the usual
//! shape-rewriting vocabulary (partial/required, readonly/mutable,
//! pick/omit, getter synthesis, capability extraction).
//!
//! Discriminated unions get their own pair of operations:
//! [`narrow_by_discriminant`] selects variants by tag, and the [`unions`]
//! module filters union member lists directly.
//!
//! Everything is pure and synchronous: inputs are borrowed immutably,
//! outputs are freshly allocated.
//!
//! [`RecordType`]: reshape_ir::RecordType

mod error;
mod narrow;
pub mod rules;
mod transform;
pub mod unions;

pub use error::{Result, TransformError};
pub use narrow::{NarrowMode, Narrowed, narrow_by_discriminant};
pub use transform::{RuleFn, TransformRule, transform};
