//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! One subcommand does the work: `migrate-exercise <ID>` with the required
//! `--path` option identifying the workshop project root. No flag affects
//! the migration algorithm itself.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON (the migration summary)
//!
//! Use `--verbose` (or `-v`) for debug output.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
