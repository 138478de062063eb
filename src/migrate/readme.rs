//! Splitting the instructions document into per-step READMEs
//!
//! The legacy instructions file has already been relocated to `README.mdx`
//! at the exercise root. Three passes run over its top-level sections:
//! the exercise pass fills the step-1 README pair, the extra-credit pass
//! fills the offset step pairs, and the background pass overwrites the root
//! `README.mdx` with the exercise-level description. Sections matching no
//! pass are left alone. Each file write is individually fault-tolerant.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Output;
use crate::domain::{
    minimal_readme, parse_sections, title_case, to_step_index, ExerciseTitle, PathLayout, Section,
    SectionKind, StepVariant,
};

use super::{MigrationSummary, README_NAME};

/// Splits the relocated instructions document into per-step READMEs
pub fn split_instructions(
    layout: &PathLayout,
    exercise_root: &Path,
    title: &ExerciseTitle,
    output: &Output,
    summary: &mut MigrationSummary,
) -> Result<()> {
    let root_readme = exercise_root.join(README_NAME);
    if !root_readme.exists() {
        output.info(&format!(
            "No {} at {}; nothing to split",
            README_NAME,
            exercise_root.display()
        ));
        return Ok(());
    }

    let text = fs::read_to_string(&root_readme)
        .with_context(|| format!("Failed to read {}", root_readme.display()))?;

    let known_steps = discovered_steps(exercise_root)?;
    let sections = parse_sections(&text);

    // exercise pass
    let (exercise, sections): (Vec<Section>, Vec<Section>) = sections
        .into_iter()
        .partition(|s| s.kind == SectionKind::Exercise);

    for section in &exercise {
        let problem = layout
            .step_dir(exercise_root, 1, StepVariant::Problem)
            .join(README_NAME);
        let solution = layout
            .step_dir(exercise_root, 1, StepVariant::Solution)
            .join(README_NAME);

        write_readme(&problem, &section.rewrite_exercise(title), output, summary);
        write_readme(&solution, &minimal_readme(&title.heading()), output, summary);
    }

    // extra-credit pass
    let (extra, sections): (Vec<Section>, Vec<Section>) = sections
        .into_iter()
        .partition(|s| matches!(s.kind, SectionKind::ExtraCredit { .. }));

    for section in &extra {
        let SectionKind::ExtraCredit { id, title: ref ec_title } = section.kind else {
            continue;
        };

        let step = to_step_index(id);
        if !known_steps.contains(&step) {
            output.info(&format!(
                "Extra credit {} maps to step {:02}, which does not exist; skipping",
                id, step
            ));
            summary.skipped_sections += 1;
            continue;
        }

        let problem = layout
            .step_dir(exercise_root, step, StepVariant::Problem)
            .join(README_NAME);
        let solution = layout
            .step_dir(exercise_root, step, StepVariant::Solution)
            .join(README_NAME);

        write_readme(&problem, &section.rewrite_extra_credit(ec_title), output, summary);
        write_readme(&solution, &minimal_readme(&title_case(ec_title)), output, summary);
    }

    // background pass; the remaining sections have no output
    for section in sections
        .iter()
        .filter(|s| s.kind == SectionKind::Background)
    {
        write_readme(
            &root_readme,
            &section.rewrite_background(title),
            output,
            summary,
        );
    }

    Ok(())
}

/// Step indices that exist on disk when splitting starts
fn discovered_steps(exercise_root: &Path) -> Result<BTreeSet<u32>> {
    use crate::domain::parse_step_index;

    let mut steps = BTreeSet::new();

    for entry in fs::read_dir(exercise_root)
        .with_context(|| format!("Failed to read directory: {}", exercise_root.display()))?
    {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.path().is_dir() && name.ends_with(".solution") {
            if let Some(index) = parse_step_index(&name) {
                steps.insert(index);
            }
        }
    }

    Ok(steps)
}

/// Writes one README; a failure is logged and counted, never fatal
fn write_readme(path: &Path, content: &str, output: &Output, summary: &mut MigrationSummary) {
    match fs::write(path, content) {
        Ok(()) => summary.readmes_written += 1,
        Err(e) => {
            output.error(&format!("Failed to write {}: {}", path.display(), e));
            summary.failed_writes += 1;
        }
    }
}
