//! Working copy of the note currently being edited in place.

use crate::board::{Label, Note, NoteId};

/// One field of a note, carrying its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteField {
    Title(String),
    Content(String),
    Label(Label),
}

impl NoteField {
    /// Return `note` with this field replaced. Text is taken verbatim.
    pub fn apply(self, mut note: Note) -> Note {
        match self {
            NoteField::Title(title) => note.title = title,
            NoteField::Content(content) => note.content = content,
            NoteField::Label(label) => note.label = label,
        }
        note
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    /// `working` is a copy; the stored note is untouched until commit.
    Editing { working: Note },
}

impl EditSession {
    /// Start editing a copy of `note`. Any earlier session is dropped
    /// without being written back.
    pub fn begin(note: &Note) -> Self {
        Self::Editing {
            working: note.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn target(&self) -> Option<NoteId> {
        self.working().map(|n| n.id)
    }

    pub fn working(&self) -> Option<&Note> {
        match self {
            Self::Editing { working } => Some(working),
            Self::Idle => None,
        }
    }

    /// Replace one field of the working copy. Idle sessions ignore edits.
    pub fn with_field(self, field: NoteField) -> Self {
        match self {
            Self::Editing { working } => Self::Editing {
                working: field.apply(working),
            },
            Self::Idle => Self::Idle,
        }
    }
}
