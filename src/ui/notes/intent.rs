use crate::board::NoteId;
use crate::ui::mvi::Intent;

use super::edit::NoteField;

#[derive(Debug, Clone, PartialEq)]
pub enum NotesIntent {
    /// Change one field of the "new note" form.
    DraftField(NoteField),
    /// Create a note from the form and clear it.
    Submit,
    Delete { id: NoteId },
    ToggleFavorite { id: NoteId },
    /// Open an edit session on a copy of the note, dropping any other session.
    BeginEdit { id: NoteId },
    EditField(NoteField),
    /// Write the working copy back and end the session.
    CommitEdit,
    /// End the session without writing anything.
    CancelEdit,
}

impl Intent for NotesIntent {}
