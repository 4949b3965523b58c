use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use reshape_manifest::ShapesFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to shapes.toml (defaults to ./shapes.toml)
    #[arg(short, long, default_value = "shapes.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ShapesFile::open(&self.config).unwrap_or_exit();
        let schema = file.schema();

        println!("✓ {} is valid\n", self.config.display());

        let record_count = schema.records.len();
        println!(
            "  {} record{}:",
            record_count,
            if record_count == 1 { "" } else { "s" }
        );
        for record in &schema.records {
            println!(
                "    {} ({} field{})",
                record.name,
                record.fields.len(),
                if record.fields.len() == 1 { "" } else { "s" }
            );
        }

        if !schema.unions.is_empty() {
            let union_count = schema.unions.len();
            println!(
                "\n  {} union{}:",
                union_count,
                if union_count == 1 { "" } else { "s" }
            );
            for union in &schema.unions {
                println!(
                    "    {} (discriminant '{}', {} member{})",
                    union.name,
                    union.discriminant,
                    union.members.len(),
                    if union.members.len() == 1 { "" } else { "s" }
                );
            }
        }

        Ok(())
    }
}
