//! Forward propagation of solution content
//!
//! Each step's solution seeds the next step's starting point: the single
//! content file of `NN.solution` is copied into `(NN+1).problem`. The last
//! discovered step has no next step and is never propagated; a failure on
//! one step skips that step only.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::Output;
use crate::domain::{order_solution_steps, suffix, PathLayout, StepVariant};

use super::fsops::{copy_file, materialize_dir};
use super::MigrationSummary;

/// Copies each solution step's content file into the next step's problem
/// directory
///
/// Steps are visited in ascending index order, computed once from the
/// directories present when propagation starts. A gap in the numbering
/// (next discovered index is not `current + 1`) is a recoverable skip, not
/// a forward-fill.
pub fn propagate_solutions(
    layout: &PathLayout,
    exercise_root: &Path,
    output: &Output,
    summary: &mut MigrationSummary,
) -> Result<()> {
    let steps = order_solution_steps(solution_dir_names(exercise_root)?);
    summary.steps = steps.len();

    // all but the last step: there is no step beyond the set discovered here
    for window in steps.windows(2) {
        let (index, ref name) = window[0];
        let (next_index, _) = window[1];

        if next_index != index + 1 {
            output.info(&format!(
                "Skipping propagation from step {:02}: step {:02} is missing",
                index,
                index + 1
            ));
            summary.skipped_steps += 1;
            continue;
        }

        let source_dir = exercise_root.join(name);
        let source = match first_file(&source_dir) {
            Some(path) => path,
            None => {
                output.error(&format!(
                    "No content file in {}; skipping step {:02}",
                    source_dir.display(),
                    index
                ));
                summary.skipped_steps += 1;
                continue;
            }
        };

        let problem_dir = layout.step_dir(exercise_root, next_index, StepVariant::Problem);
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let target = problem_dir.join(format!("index.{}", suffix(&file_name)));

        let copied =
            materialize_dir(&problem_dir, output).and_then(|_| copy_file(&source, &target));
        match copied {
            Ok(()) => summary.propagated += 1,
            Err(e) => {
                output.error(&format!("Skipping step {:02}: {:#}", index, e));
                summary.skipped_steps += 1;
            }
        }
    }

    Ok(())
}

/// Lists the `NN.solution` directory names under the exercise root
fn solution_dir_names(exercise_root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(exercise_root)
        .with_context(|| format!("Failed to read directory: {}", exercise_root.display()))?
    {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.path().is_dir() && name.ends_with(".solution") {
            names.push(name);
        }
    }

    Ok(names)
}

/// Returns the first regular file in a directory, if any
fn first_file(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.is_file())
}
