//! Legacy filename classification
//!
//! Legacy files carry all their metadata in the name: the exercise id as a
//! zero-padded prefix, an optional embedded step id as a `-<digits>.` run,
//! and the role implied by which source directory they live in. This module
//! decodes that, nothing more; names that do not match are ignored rather
//! than reported (the migration is best-effort by design).

/// Extension used when a legacy filename has none
pub const FALLBACK_SUFFIX: &str = "tsx";

/// Extension of the shared instructions document in the legacy tree
const INSTRUCTIONS_SUFFIX: &str = "md";

/// Which legacy source directory a file was listed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacySet {
    /// `src/exercise/` - instructions and playground files
    Exercise,
    /// `src/final/` - solution and extra-credit files
    Final,
}

/// Role of a legacy file in the migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyRole {
    /// Not part of this exercise's migration
    Ignored,
    /// The shared instructions document
    Instructions,
    /// A starting-point source file for step 1
    Playground,
    /// A solution file; `embedded_id` 0 is the base solution (step 1),
    /// ids >= 1 are extra-credit items (step id + 1)
    Solution { embedded_id: u32 },
}

/// Classifies a legacy filename against the target exercise id prefix
///
/// Rules are applied in order: files not starting with the prefix are
/// ignored; in the exercise set, `extra-` files are ignored (extra credit is
/// only migrated from the final set) and `.md` is the instructions document;
/// in the final set every matching file is a solution. Total function, never
/// errors.
pub fn classify(name: &str, prefix: &str, set: LegacySet) -> LegacyRole {
    if !name.starts_with(prefix) {
        return LegacyRole::Ignored;
    }

    match set {
        LegacySet::Exercise => {
            if name.contains("extra-") {
                LegacyRole::Ignored
            } else if suffix(name) == INSTRUCTIONS_SUFFIX {
                LegacyRole::Instructions
            } else {
                LegacyRole::Playground
            }
        }
        LegacySet::Final => LegacyRole::Solution {
            embedded_id: embedded_id(name).unwrap_or(0),
        },
    }
}

/// Returns the file extension, or the fixed fallback when absent
pub fn suffix(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => FALLBACK_SUFFIX,
    }
}

/// Extracts the first `-<digits>.` run from a filename
///
/// `05-01.tsx` yields 1; `05.tsx` yields nothing (the caller treats that as
/// the base solution, id 0).
fn embedded_id(name: &str) -> Option<u32> {
    let bytes = name.as_bytes();
    let mut i = 0;

    while let Some(offset) = name[i..].find('-') {
        let start = i + offset + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        if end > start && bytes.get(end) == Some(&b'.') {
            // digits always fit in u32 for any sane filename; a longer run
            // is not an embedded id
            if let Ok(id) = name[start..end].parse() {
                return Some(id);
            }
        }

        i = start;
    }

    None
}
