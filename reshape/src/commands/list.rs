use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use reshape_manifest::ShapesFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to shapes.toml (defaults to ./shapes.toml)
    #[arg(short, long, default_value = "shapes.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ShapesFile::open(&self.config).unwrap_or_exit();
        let schema = file.schema();

        if schema.records.is_empty() {
            println!("No records defined");
        } else {
            println!("Records:");
            for record in &schema.records {
                let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
                println!("  {} {{ {} }}", record.name, names.join(", "));
            }
        }

        if !schema.unions.is_empty() {
            println!("\nUnions:");
            for union in &schema.unions {
                println!(
                    "  {} = {} (by '{}')",
                    union.name,
                    union.members.join(" | "),
                    union.discriminant
                );
            }
        }

        Ok(())
    }
}
