//! Sticky note model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder stored when a note is created with a blank title.
pub const UNTITLED: &str = "Untitled";
/// Placeholder stored when a note is created with blank content.
pub const NO_CONTENT: &str = "No content";

/// Identifier of a note, unique within one [`NoteList`](super::NoteList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u32);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of note categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Personal,
    Study,
    Work,
    #[default]
    Other,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Personal, Label::Study, Label::Work, Label::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Personal => "personal",
            Label::Study => "study",
            Label::Work => "work",
            Label::Other => "other",
        }
    }

    /// Next label in [`Label::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous label in [`Label::ALL`], wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub label: Label,
}

/// Unsaved contents of the "new note" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub label: Label,
}

/// Trimmed `title`, or [`UNTITLED`] when nothing is left.
pub fn normalize_title(title: &str) -> String {
    or_placeholder(title, UNTITLED)
}

/// Trimmed `content`, or [`NO_CONTENT`] when nothing is left.
pub fn normalize_content(content: &str) -> String {
    or_placeholder(content, NO_CONTENT)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    match value.trim() {
        "" => placeholder.to_string(),
        trimmed => trimmed.to_string(),
    }
}
