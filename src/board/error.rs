use thiserror::Error;

use crate::board::note::NoteId;

/// Errors returned by list store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Note {0} not found")]
    UnknownNote(NoteId),

    #[error("Grocery item '{0}' not found")]
    UnknownItem(String),

    #[error("No note ids left after {0}")]
    IdsExhausted(NoteId),
}
