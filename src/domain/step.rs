//! Step numbering and ordering
//!
//! Step 1 is the exercise's base playground/solution pair; legacy
//! extra-credit ids are offset by +1 so extra credit 1 becomes step 2.

use std::fmt;

/// Which half of a step a directory holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVariant {
    Problem,
    Solution,
}

impl fmt::Display for StepVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepVariant::Problem => write!(f, "problem"),
            StepVariant::Solution => write!(f, "solution"),
        }
    }
}

/// Maps a legacy embedded id to its step index
///
/// Id 0 (a final file with no embedded digits) is the base solution and maps
/// to step 1; extra credit `n` maps to step `n + 1`.
pub fn to_step_index(embedded_id: u32) -> u32 {
    embedded_id + 1
}

/// Returns the directory name for a step, e.g. `01.problem`
pub fn step_dir_name(index: u32, variant: StepVariant) -> String {
    format!("{:02}.{}", index, variant)
}

/// Parses the leading zero-padded integer of a step directory name
///
/// `02.solution` yields 2; names without a leading integer yield nothing and
/// are excluded from ordering.
pub fn parse_step_index(dir_name: &str) -> Option<u32> {
    let digits = dir_name.split('.').next()?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Sorts solution step directory names into propagation order
///
/// The sort key is the parsed leading integer; the sort is stable so ties
/// keep their original enumeration order. Names that do not parse are
/// dropped.
pub fn order_solution_steps(names: Vec<String>) -> Vec<(u32, String)> {
    let mut steps: Vec<(u32, String)> = names
        .into_iter()
        .filter_map(|name| parse_step_index(&name).map(|index| (index, name)))
        .collect();
    steps.sort_by_key(|(index, _)| *index);
    steps
}
