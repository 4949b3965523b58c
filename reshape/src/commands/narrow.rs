use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use reshape_ir::{Literal, NamedUnion, RecordType, render_interface};
use reshape_manifest::ShapesFile;
use reshape_transform::{NarrowMode, Narrowed, narrow_by_discriminant};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct NarrowCommand {
    /// Union to narrow, as named in shapes.toml
    pub union: String,

    /// Discriminant tag to narrow to, e.g. square, 2, true
    #[arg(short, long)]
    pub tag: String,

    /// Treat the union as one compound type instead of narrowing per member
    #[arg(long)]
    pub non_distributive: bool,

    /// Path to shapes.toml (defaults to ./shapes.toml)
    #[arg(short, long, default_value = "shapes.toml")]
    pub config: PathBuf,

    /// Emit the narrowed shape as JSON instead of interface text
    #[arg(long)]
    pub json: bool,
}

impl NarrowCommand {
    pub fn run(&self) -> Result<()> {
        let file = ShapesFile::open(&self.config).unwrap_or_exit();
        let catalog = file.schema().lower();

        let Some(union) = catalog.union(&self.union) else {
            let known: Vec<&str> = catalog.unions.iter().map(|u| u.name.as_str()).collect();
            bail!(
                "no union named '{}' in {} (defined: {})",
                self.union,
                self.config.display(),
                known.join(", ")
            );
        };

        let shapes: Vec<RecordType> = union.variants.iter().map(|v| v.shape.clone()).collect();
        let tag = parse_tag(&self.tag);
        let mode = if self.non_distributive {
            NarrowMode::NonDistributive
        } else {
            NarrowMode::Distributive
        };

        match narrow_by_discriminant(&shapes, &union.discriminant, &tag, mode) {
            Narrowed::Single(shape) => self.print_shape(union, &shape)?,
            Narrowed::Multiple(shapes) => {
                for shape in &shapes {
                    self.print_shape(union, shape)?;
                }
            }
            Narrowed::NoMatch => {
                println!(
                    "no variant of '{}' matches {} = {}",
                    union.name, union.discriminant, tag
                );
            }
        }

        Ok(())
    }

    fn print_shape(&self, union: &NamedUnion, shape: &RecordType) -> Result<()> {
        // Recover the declared variant name when an unmodified variant
        // comes back; projections fall back to the union name.
        let name = union
            .variants
            .iter()
            .find(|v| v.shape == *shape)
            .map(|v| v.name.as_str())
            .unwrap_or(union.name.as_str());

        if self.json {
            println!("{}", serde_json::to_string_pretty(shape)?);
        } else {
            print!("{}", render_interface(name, shape));
        }
        Ok(())
    }
}

/// Interpret a command-line tag as the closest literal: bool, integer,
/// then string.
fn parse_tag(raw: &str) -> Literal {
    if let Ok(b) = raw.parse::<bool>() {
        return Literal::Bool(b);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Literal::Int(n);
    }
    Literal::Str(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag("square"), Literal::Str("square".into()));
        assert_eq!(parse_tag("true"), Literal::Bool(true));
        assert_eq!(parse_tag("42"), Literal::Int(42));
    }
}
