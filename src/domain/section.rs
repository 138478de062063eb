//! Markdown section parsing and rewriting for the instructions document
//!
//! The legacy instructions file is one document with top-level sections for
//! the exercise itself, numbered extra-credit items, and a trailing
//! background description. This module splits it at `# ` heading lines
//! (lookahead split, the heading starts its section), classifies each
//! section by heading text, and rewrites section bodies into the per-step
//! README fragments. Parsing is line-oriented; headings that do not match
//! any known shape are passed through untouched rather than failing.

use super::title::{title_case, ExerciseTitle};

/// What a section turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// The main exercise section, destined for the step-1 README pair
    Exercise,
    /// A numbered extra-credit section; `id` is the legacy numeric id
    ExtraCredit { id: u32, title: String },
    /// The trailing background description for the exercise root README
    Background,
    /// Anything else, including headings that failed to parse; never written
    Other,
}

/// One contiguous run of lines starting at a top-level heading
#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    lines: Vec<String>,
}

impl Section {
    fn new(lines: Vec<String>) -> Self {
        let kind = lines
            .first()
            .and_then(|line| line.strip_prefix("# "))
            .map(classify_heading)
            .unwrap_or(SectionKind::Other);

        Self { kind, lines }
    }

    /// Body lines, i.e. everything after the heading
    fn body(&self) -> &[String] {
        if self.has_heading() {
            &self.lines[1..]
        } else {
            &self.lines
        }
    }

    fn has_heading(&self) -> bool {
        self.lines
            .first()
            .is_some_and(|line| line.starts_with("# "))
    }

    /// Rewrites the main exercise section for the step-1 problem README
    ///
    /// Drops subheadings, the deploy metadata line, and the legacy
    /// `[Exercise]`/`[Final]` link items, then retitles with the exercise
    /// title.
    pub fn rewrite_exercise(&self, title: &ExerciseTitle) -> String {
        let body = self.body().iter().filter(|line| {
            !(line.starts_with("## ")
                || line.contains("Production deploy")
                || line.starts_with("- [Exercise")
                || line.starts_with("- [Final"))
        });

        retitle(&title.heading(), body)
    }

    /// Rewrites an extra-credit section for its step's problem README
    ///
    /// `ec_title` is the title extracted from the section's own heading.
    pub fn rewrite_extra_credit(&self, ec_title: &str) -> String {
        let body = self
            .body()
            .iter()
            .filter(|line| !(line.starts_with("### ") || line.contains("[Production deploy")));

        retitle(&title_case(ec_title), body)
    }

    /// Rewrites the background section for the exercise root README
    pub fn rewrite_background(&self, title: &ExerciseTitle) -> String {
        let body = self.body().iter().filter(|line| !line.starts_with("## "));

        retitle(&title.heading(), body)
    }
}

/// Splits the instructions text into sections at top-level heading lines
///
/// The split is a lookahead: each `# ` line begins a new section and stays
/// in it. Lines before the first heading become a single pass-through
/// section. Deeper headings (`## `, `### `) stay inside section bodies where
/// the rewrite filters handle them.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.starts_with("# ") && !current.is_empty() {
            sections.push(Section::new(std::mem::take(&mut current)));
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        sections.push(Section::new(current));
    }

    sections
}

/// Writes the minimal README used for solution step directories
pub fn minimal_readme(heading: &str) -> String {
    format!("# {}\n", heading)
}

/// Classifies a top-level heading's text
///
/// Applied per section in pass order: an "Exercise" heading wins over a
/// digit, a digit over "Background". A digit-bearing heading that does not
/// match the `<label> <digit> <emoji> <title>` shape is left unclassified.
fn classify_heading(text: &str) -> SectionKind {
    let lowered = text.to_lowercase();

    if lowered.contains("exercise") {
        return SectionKind::Exercise;
    }

    if text.chars().any(|c| c.is_ascii_digit()) {
        return match parse_extra_credit_heading(text) {
            Some((id, title)) => SectionKind::ExtraCredit { id, title },
            None => SectionKind::Other,
        };
    }

    if lowered.contains("background") {
        return SectionKind::Background;
    }

    SectionKind::Other
}

/// Parses a heading of the form `<label> <digit> <emoji> <title>`
///
/// The label may span several words ("Extra Credit"); the first all-digit
/// token (an optional trailing `.` is tolerated) is the id, the token after
/// it is the emoji, and everything past that is the title.
fn parse_extra_credit_heading(text: &str) -> Option<(u32, String)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let digit_pos = tokens
        .iter()
        .position(|token| is_numeric_token(token))?;

    let id: u32 = tokens[digit_pos].trim_end_matches('.').parse().ok()?;

    // skip the emoji token; a heading with no title past it is malformed
    let title_tokens = tokens.get(digit_pos + 2..)?;
    if title_tokens.is_empty() {
        return None;
    }

    Some((id, title_tokens.join(" ")))
}

fn is_numeric_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Prefixes a retitled top-level heading and collapses triple newlines
fn retitle<'a>(heading: &str, body: impl Iterator<Item = &'a String>) -> String {
    let body: Vec<&str> = body.map(String::as_str).collect();
    let mut text = format!("# {}\n{}", heading, body.join("\n"));

    while text.contains("\n\n\n") {
        text = text.replace("\n\n\n", "\n");
    }

    if !text.ends_with('\n') {
        text.push('\n');
    }

    text
}
