mod apply;
mod check;
mod completions;
mod list;
mod narrow;

use apply::ApplyCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use narrow::NarrowCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for reshape_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "reshape")]
#[command(version)]
#[command(about = "Apply structural type transforms to record shapes defined in TOML")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Apply(cmd) => cmd.run(),
            Commands::Narrow(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate shapes.toml without transforming anything
    Check(CheckCommand),

    /// List records and unions defined in shapes.toml
    List(ListCommand),

    /// Apply a transform rule to a record and print the result
    Apply(ApplyCommand),

    /// Narrow a union by discriminant tag
    Narrow(NarrowCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
