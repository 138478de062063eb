//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use crate::migrate;

#[derive(Parser)]
#[command(name = "workshop-migrate")]
#[command(author, version, about = "Migrate legacy flat exercises to the step-based workshop layout")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the workshop project root
    #[arg(long, short = 'p', env = "WORKSHOP_ROOT")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Migrate one exercise into the step-based layout
    MigrateExercise {
        /// Exercise id to migrate
        id: u32,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::MigrateExercise { id } => {
            output.verbose_ctx(
                "migrate",
                &format!("Migrating exercise {} in {}", id, cli.path.display()),
            );

            let summary = migrate::run(id, &cli.path, &output)?;

            if output.is_json() {
                output.data(&summary);
            } else {
                output.success(&format!(
                    "Migrated exercise {:02} to {}",
                    id,
                    summary.exercise_root.display()
                ));
                output.success(&format!(
                    "  steps: {}, playground moved: {}, solutions moved: {}, propagated: {}, readmes: {}",
                    summary.steps,
                    summary.playground_moved,
                    summary.solutions_moved,
                    summary.propagated,
                    summary.readmes_written
                ));

                let skipped = summary.skipped_steps + summary.skipped_sections;
                if skipped > 0 || summary.failed_writes > 0 {
                    output.success(&format!(
                        "  skipped: {}, failed: {} (see log lines above)",
                        skipped, summary.failed_writes
                    ));
                }
            }
        }
    }

    Ok(())
}
