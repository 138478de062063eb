//! Workshop migrate - a one-shot converter from the legacy flat course
//! layout to the step-based workshop layout
//!
//! The legacy tree keeps, per exercise, a shared instructions file plus
//! playground and final (solution) files under `src/exercise` and
//! `src/final`, disambiguated by filename prefixes. The workshop tree keeps
//! one directory per exercise with numbered `problem`/`solution` step
//! directories, each step seeded from the previous step's solution.

pub mod domain;
pub mod migrate;
pub mod cli;

pub use domain::{ExerciseTitle, LegacyRole, LegacySet, PathLayout, StepVariant};
pub use migrate::{MigrateError, MigrationSummary};
