//! Record-type descriptions for the reshape type toolkit.
//!
//! This crate defines the metadata model the rest of the workspace operates
//! on: a [`RecordType`] is an ordered list of named, typed [`Field`]s, each
//! with `optional` and `readonly` modifiers, and a [`TypeRef`] describes a
//! field's type with just enough structure for the transform rules that need
//! to look inside (callables, literals, nested records, unions).
//!
//! # Architecture
//!
//! ```text
//! shapes.toml → reshape-manifest (parsing) → reshape-ir (catalog) → reshape-transform
//! ```
//!
//! The types here are plain data: invariants (field-name uniqueness, literal
//! discriminants) are enforced by the producers — manifest validation and the
//! transform engine — not by constructors.

mod catalog;
mod record;
mod render;
mod types;

pub use catalog::{Catalog, NamedRecord, NamedUnion};
pub use record::{Field, RecordType};
pub use render::render_interface;
pub use types::{Literal, TypeRef};
