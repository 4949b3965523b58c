//! Shared utilities for the reshape type toolkit.
//!
//! This crate holds the string helpers used when deriving new field names
//! (getter prefixes, intrinsic case transforms). It has no dependencies and
//! no knowledge of the type model.

mod case;

pub use case::{capitalize, uncapitalize};
