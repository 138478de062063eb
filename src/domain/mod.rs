//! Domain logic for the migration
//!
//! Contains the pure classification, numbering, path, and markdown-section
//! rules without any I/O concerns.

mod layout;
mod classify;
mod step;
mod title;
mod section;

pub use layout::PathLayout;
pub use classify::{classify, suffix, LegacyRole, LegacySet, FALLBACK_SUFFIX};
pub use step::{order_solution_steps, parse_step_index, step_dir_name, to_step_index, StepVariant};
pub use title::{title_case, ExerciseTitle};
pub use section::{minimal_readme, parse_sections, Section, SectionKind};
