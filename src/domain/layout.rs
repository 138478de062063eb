//! Path construction for the legacy and workshop trees
//!
//! Legacy layout: `<root>/src/exercise/*` and `<root>/src/final/*`,
//! filenames prefixed with the zero-padded exercise id.
//! Workshop layout: `<root>/exercises/<NN>.<slug>/<NN>.<variant>/`.

use std::path::{Path, PathBuf};

use super::step::{step_dir_name, StepVariant};
use super::title::ExerciseTitle;

/// Path builder for one migration run
///
/// Built once per invocation from the project root and exercise id; every
/// stage borrows it. Pure path joining, no I/O and no error cases.
#[derive(Debug, Clone)]
pub struct PathLayout {
    root: PathBuf,
    exercise_id: u32,
}

impl PathLayout {
    pub fn new(root: impl Into<PathBuf>, exercise_id: u32) -> Self {
        Self {
            root: root.into(),
            exercise_id,
        }
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the exercise id as the zero-padded filename prefix
    pub fn id_prefix(&self) -> String {
        format!("{:02}", self.exercise_id)
    }

    /// Returns a path under the legacy `src/` tree
    pub fn legacy_src(&self, segment: &str) -> PathBuf {
        self.root.join("src").join(segment)
    }

    /// Returns the legacy exercise source directory
    pub fn legacy_exercise_dir(&self) -> PathBuf {
        self.legacy_src("exercise")
    }

    /// Returns the legacy final (solution) source directory
    pub fn legacy_final_dir(&self) -> PathBuf {
        self.legacy_src("final")
    }

    /// Returns the workshop `exercises/` directory
    pub fn exercises_dir(&self) -> PathBuf {
        self.root.join("exercises")
    }

    /// Returns the workshop root directory for this exercise
    pub fn exercise_root(&self, title: &ExerciseTitle) -> PathBuf {
        self.exercises_dir()
            .join(format!("{}.{}", self.id_prefix(), title.slug()))
    }

    /// Returns a step directory under an exercise root
    pub fn step_dir(&self, exercise_root: &Path, index: u32, variant: StepVariant) -> PathBuf {
        exercise_root.join(step_dir_name(index, variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_prefix_is_zero_padded() {
        assert_eq!(PathLayout::new("/w", 5).id_prefix(), "05");
        assert_eq!(PathLayout::new("/w", 12).id_prefix(), "12");
        assert_eq!(PathLayout::new("/w", 0).id_prefix(), "00");
    }

    #[test]
    fn legacy_paths_join_under_src() {
        let layout = PathLayout::new("/workshop", 5);
        assert_eq!(
            layout.legacy_exercise_dir(),
            PathBuf::from("/workshop/src/exercise")
        );
        assert_eq!(
            layout.legacy_final_dir(),
            PathBuf::from("/workshop/src/final")
        );
    }

    #[test]
    fn exercise_root_uses_prefix_and_slug() {
        let layout = PathLayout::new("/workshop", 5);
        let title = ExerciseTitle::new("Count Clicks");
        assert_eq!(
            layout.exercise_root(&title),
            PathBuf::from("/workshop/exercises/05.count-clicks")
        );
    }

    #[test]
    fn step_dir_is_padded_and_suffixed() {
        let layout = PathLayout::new("/workshop", 5);
        let root = PathBuf::from("/workshop/exercises/05.count-clicks");
        assert_eq!(
            layout.step_dir(&root, 1, StepVariant::Problem),
            root.join("01.problem")
        );
        assert_eq!(
            layout.step_dir(&root, 2, StepVariant::Solution),
            root.join("02.solution")
        );
    }
}
