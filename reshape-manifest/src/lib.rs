// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! shapes.toml parsing and validation.
//!
//! A manifest declares named record shapes and discriminated unions over
//! them:
//!
//! ```toml
//! [[records]]
//! name = "person"
//! fields = [
//!   { name = "id", type = "string", readonly = true },
//!   { name = "age", type = "number", optional = true },
//! ]
//!
//! [[unions]]
//! name = "shape-event"
//! discriminant = "kind"
//! members = ["square-event", "circle-event"]
//! ```
//!
//! Parsing validates the document (unique names, well-formed field types,
//! resolvable references, literal discriminants) with span-carrying
//! diagnostics, then [`Schema::lower`] produces the
//! [`Catalog`](reshape_ir::Catalog) the transform engine works on.

mod error;
mod file;
mod lower;
mod parse;
mod validate;

use std::str::FromStr;

pub use error::{Error, Result, SourceContext};
pub use file::ShapesFile;
use serde::Deserialize;

/// Root schema for shapes.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Named record shapes, in declaration order
    #[serde(default)]
    pub records: Vec<RecordDef>,

    /// Discriminated unions over previously declared records
    #[serde(default)]
    pub unions: Vec<UnionDef>,
}

impl Schema {
    /// Look up a record definition by name.
    pub fn record(&self, name: &str) -> Option<&RecordDef> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Look up a union definition by name.
    pub fn union(&self, name: &str) -> Option<&UnionDef> {
        self.unions.iter().find(|u| u.name == name)
    }
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse_shapes(s, "shapes.toml")
    }
}

/// A named record declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Look up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One field of a record declaration.
///
/// Exactly one of `ty`, `literal`, `record`, or `returns` must be set;
/// validation rejects the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,

    /// Opaque named type, e.g. `type = "string"`
    #[serde(rename = "type")]
    pub ty: Option<String>,

    /// Literal type, e.g. `literal = "square"` or `literal = true`
    pub literal: Option<toml::Value>,

    /// Inline shape of a record defined earlier in the file
    pub record: Option<String>,

    /// Zero-argument callable returning the named type
    pub returns: Option<String>,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub readonly: bool,
}

/// A discriminated union declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct UnionDef {
    pub name: String,

    /// Name of the tag field (defaults to "kind")
    #[serde(default = "default_discriminant")]
    pub discriminant: String,

    /// Names of the member records
    #[serde(default)]
    pub members: Vec<String>,
}

fn default_discriminant() -> String {
    "kind".to_string()
}
