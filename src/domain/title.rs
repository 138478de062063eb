//! Exercise title derivation
//!
//! The title comes from the first top-level heading of the legacy
//! instructions document and is used in two forms: a slug for the new
//! exercise root directory name and a title-cased form for generated README
//! headings.

/// Title used when the instructions document is missing or has no heading
pub const UNTITLED: &str = "UNTITLED";

/// The exercise title, derived once per migration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTitle {
    raw: String,
}

impl ExerciseTitle {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Reads the title from the first `# ` heading of the instructions text
    ///
    /// Falls back to the literal `UNTITLED` when no heading is found.
    pub fn from_instructions(text: &str) -> Self {
        text.lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(|rest| Self::new(rest.trim()))
            .unwrap_or_else(Self::untitled)
    }

    /// The fallback title
    pub fn untitled() -> Self {
        Self::new(UNTITLED)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Directory-name form: lowercased, runs of non-alphanumerics collapsed
    /// to single hyphens
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.raw.len());
        let mut pending_hyphen = false;

        for c in self.raw.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_hyphen = true;
            }
        }

        if slug.is_empty() {
            UNTITLED.to_ascii_lowercase()
        } else {
            slug
        }
    }

    /// Heading form: first letter of every word uppercased
    pub fn heading(&self) -> String {
        title_case(&self.raw)
    }
}

/// Uppercases the first character of each whitespace-separated word
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
