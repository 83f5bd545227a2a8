use crate::board::{Note, NoteDraft, NoteList, Notebook};
use crate::ui::mvi::UiState;

use super::edit::EditSession;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotesState {
    pub book: Notebook,
    /// Contents of the "new note" form.
    pub draft: NoteDraft,
    pub edit: EditSession,
}

impl UiState for NotesState {}

impl NotesState {
    pub fn new(notes: NoteList) -> Self {
        Self {
            book: Notebook::new(notes),
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.book.notes().notes()
    }

    /// Favorites view, rebuilt from the current state on every call.
    pub fn favorites(&self) -> Vec<&Note> {
        self.book.favorites()
    }
}
