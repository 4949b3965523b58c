use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use reshape_ir::{NamedRecord, render_interface};
use reshape_manifest::ShapesFile;
use reshape_transform::transform;

use super::UnwrapOrExit;
use crate::rulespec::RuleSpec;

#[derive(Args)]
pub struct ApplyCommand {
    /// Record to transform, as named in shapes.toml
    pub record: String,

    /// Transform rule, e.g. partial, pick:name,age, getters, case:upper
    #[arg(short, long)]
    pub rule: RuleSpec,

    /// Path to shapes.toml (defaults to ./shapes.toml)
    #[arg(short, long, default_value = "shapes.toml")]
    pub config: PathBuf,

    /// Name for the rendered interface (defaults to the record name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Emit the transformed record as JSON instead of interface text
    #[arg(long)]
    pub json: bool,
}

impl ApplyCommand {
    pub fn run(&self) -> Result<()> {
        let file = ShapesFile::open(&self.config).unwrap_or_exit();
        let catalog = file.schema().lower();

        let Some(record) = catalog.record(&self.record) else {
            let known: Vec<&str> = catalog.records.iter().map(|r| r.name.as_str()).collect();
            bail!(
                "no record named '{}' in {} (defined: {})",
                self.record,
                self.config.display(),
                known.join(", ")
            );
        };

        let rule = self.rule.clone().into_rule();
        let shape = transform(&record.shape, rule.as_ref())?;
        let name = self.name.clone().unwrap_or_else(|| record.name.clone());

        if self.json {
            let named = NamedRecord { name, shape };
            println!("{}", serde_json::to_string_pretty(&named)?);
        } else {
            print!("{}", render_interface(&name, &shape));
        }

        Ok(())
    }
}
