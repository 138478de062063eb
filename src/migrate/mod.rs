//! # Migration Engine
//!
//! Side-effecting stages that turn one legacy exercise into its workshop
//! layout, run strictly in sequence:
//!
//! 1. Derive the exercise title from the legacy instructions document.
//! 2. Materialize `exercises/` and the exercise root.
//! 3. Move the legacy exercise files (instructions to the root `README.mdx`,
//!    playground files to `01.problem/`).
//! 4. Move the legacy final files into their `NN.solution/` directories.
//! 5. Propagate each solution forward into the next step's problem directory.
//! 6. Split the root `README.mdx` into per-step fragments.
//!
//! Only a missing legacy `exercise/` directory aborts the run. Every other
//! failure is caught at the narrowest scope (per file, per step, per
//! section), logged, counted in the [`MigrationSummary`], and the run
//! continues: the tool is human-supervised and re-runnable, so best-effort
//! beats all-or-nothing.

mod fsops;
mod propagate;
mod readme;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

use crate::cli::Output;
use crate::domain::{
    classify, suffix, to_step_index, ExerciseTitle, LegacyRole, LegacySet, PathLayout, StepVariant,
};

use fsops::{materialize_dir, move_file};

const README_NAME: &str = "README.mdx";

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Legacy exercise directory not found or unreadable: {0}")]
    LegacySourceMissing(PathBuf),
}

/// Structured result of one migration run
///
/// Recoverable failures do not fail the run; they show up here as counts so
/// callers have more than console text to go on.
#[derive(Debug, Default, Serialize)]
pub struct MigrationSummary {
    /// The new exercise root directory
    pub exercise_root: PathBuf,
    /// The derived exercise title (`UNTITLED` when none was found)
    pub title: String,
    /// Playground files moved into `01.problem/`
    pub playground_moved: usize,
    /// Solution files moved into `NN.solution/` directories
    pub solutions_moved: usize,
    /// Solution step directories discovered at propagation start
    pub steps: usize,
    /// Solutions copied forward into the next step's problem directory
    pub propagated: usize,
    /// Propagation steps skipped (missing content, gaps, copy failures)
    pub skipped_steps: usize,
    /// Instruction sections skipped (step out of range)
    pub skipped_sections: usize,
    /// README files written by the section splitter
    pub readmes_written: usize,
    /// Recoverable file operations that failed
    pub failed_writes: usize,
}

/// Migrates one exercise from the legacy layout to the workshop layout
pub fn run(exercise_id: u32, root: &Path, output: &Output) -> Result<MigrationSummary> {
    let layout = PathLayout::new(root, exercise_id);
    let prefix = layout.id_prefix();
    let mut summary = MigrationSummary::default();

    // the legacy exercise directory is the one thing the run cannot do
    // without
    let exercise_dir = layout.legacy_exercise_dir();
    let (instructions, playground) = list_exercise_files(&exercise_dir, &prefix)?;

    let title = derive_title(&exercise_dir, instructions.as_deref(), output);
    output.verbose_ctx("migrate", &format!("Exercise title: {}", title.as_str()));

    // shallowest-first: directory creation is non-recursive
    let exercise_root = layout.exercise_root(&title);
    materialize_dir(&layout.exercises_dir(), output)?;
    materialize_dir(&exercise_root, output)?;

    // stage: relocate the instructions document to the exercise root
    if let Some(name) = &instructions {
        let from = exercise_dir.join(name);
        let to = exercise_root.join(README_NAME);
        if let Err(e) = move_file(&from, &to) {
            output.error(&format!("{:#}", e));
            summary.failed_writes += 1;
        }
    }

    // stage: move playground files into the base problem step
    if !playground.is_empty() {
        let problem_dir = layout.step_dir(&exercise_root, 1, StepVariant::Problem);
        materialize_dir(&problem_dir, output)?;

        for name in &playground {
            let from = exercise_dir.join(name);
            let to = problem_dir.join(format!("index.{}", suffix(name)));
            match move_file(&from, &to) {
                Ok(()) => summary.playground_moved += 1,
                Err(e) => {
                    output.error(&format!("{:#}", e));
                    summary.failed_writes += 1;
                }
            }
        }
    }

    // stage: move final files into their solution steps
    move_final_files(&layout, &exercise_root, output, &mut summary)?;

    // stage: seed each next step from the previous solution
    propagate::propagate_solutions(&layout, &exercise_root, output, &mut summary)?;

    // stage: split the instructions into per-step READMEs
    readme::split_instructions(&layout, &exercise_root, &title, output, &mut summary)?;

    summary.exercise_root = exercise_root;
    summary.title = title.as_str().to_string();

    Ok(summary)
}

/// Lists and classifies the legacy exercise directory
///
/// Returns the instructions filename (if present) and the playground
/// filenames. An unlistable directory is the run's one fatal error.
fn list_exercise_files(
    exercise_dir: &Path,
    prefix: &str,
) -> Result<(Option<String>, Vec<String>)> {
    let entries = fs::read_dir(exercise_dir)
        .map_err(|_| MigrateError::LegacySourceMissing(exercise_dir.to_path_buf()))?;

    let mut instructions = None;
    let mut playground = Vec::new();

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match classify(&name, prefix, LegacySet::Exercise) {
            LegacyRole::Instructions => instructions = Some(name),
            LegacyRole::Playground => playground.push(name),
            _ => {}
        }
    }

    playground.sort();
    Ok((instructions, playground))
}

/// Reads the exercise title from the instructions file
///
/// A missing or unreadable instructions document is recoverable: the run
/// keeps going with the `UNTITLED` fallback.
fn derive_title(exercise_dir: &Path, instructions: Option<&str>, output: &Output) -> ExerciseTitle {
    let Some(name) = instructions else {
        output.error(&format!(
            "No instructions document in {}; using the UNTITLED fallback",
            exercise_dir.display()
        ));
        return ExerciseTitle::untitled();
    };

    match fs::read_to_string(exercise_dir.join(name)) {
        Ok(text) => ExerciseTitle::from_instructions(&text),
        Err(e) => {
            output.error(&format!("Failed to read {}: {}", name, e));
            ExerciseTitle::untitled()
        }
    }
}

/// Moves each legacy final file into its solution step directory
///
/// The embedded id in the filename picks the step: no id is the base
/// solution (step 1), id `n` is extra credit (step `n + 1`). An unlistable
/// `final/` directory is logged and treated as "no solution files".
fn move_final_files(
    layout: &PathLayout,
    exercise_root: &Path,
    output: &Output,
    summary: &mut MigrationSummary,
) -> Result<()> {
    let final_dir = layout.legacy_final_dir();
    let entries = match fs::read_dir(&final_dir) {
        Ok(entries) => entries,
        Err(e) => {
            output.error(&format!(
                "Failed to read {}: {}; no solutions to migrate",
                final_dir.display(),
                e
            ));
            return Ok(());
        }
    };

    let prefix = layout.id_prefix();

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let LegacyRole::Solution { embedded_id } = classify(&name, &prefix, LegacySet::Final)
        else {
            continue;
        };

        let step = to_step_index(embedded_id);
        let solution_dir = layout.step_dir(exercise_root, step, StepVariant::Solution);
        let to = solution_dir.join(format!("index.{}", suffix(&name)));

        let moved = materialize_dir(&solution_dir, output)
            .and_then(|_| move_file(&final_dir.join(&name), &to));
        match moved {
            Ok(()) => summary.solutions_moved += 1,
            Err(e) => {
                output.error(&format!("{:#}", e));
                summary.failed_writes += 1;
            }
        }
    }

    Ok(())
}
