//! Reducer for the sticky notes board.

use crate::board::{NoteDraft, Notebook};
use crate::ui::mvi::Reducer;

use super::edit::{EditSession, NoteField};
use super::intent::NotesIntent;
use super::state::NotesState;

/// Store errors (unknown ids) never escape: they are logged and the previous
/// state is kept.
pub struct NotesReducer;

impl Reducer for NotesReducer {
    type State = NotesState;
    type Intent = NotesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotesIntent::DraftField(field) => NotesState {
                draft: apply_to_draft(state.draft, field),
                ..state
            },

            NotesIntent::Submit => {
                let draft = &state.draft;
                match state.book.create(&draft.title, &draft.content, draft.label) {
                    Ok((book, id)) => {
                        tracing::info!(note_id = %id, "Note created");
                        NotesState {
                            book,
                            draft: NoteDraft::default(),
                            ..state
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Create ignored: {}", err);
                        state
                    }
                }
            }

            NotesIntent::Delete { id } => match state.book.delete(id) {
                Ok(book) => {
                    tracing::info!(note_id = %id, "Note deleted");
                    log_favorites_change(&state.book, &book);
                    // Deleting the note under edit ends the session
                    let edit = if state.edit.target() == Some(id) {
                        EditSession::Idle
                    } else {
                        state.edit
                    };
                    NotesState { book, edit, ..state }
                }
                Err(err) => {
                    tracing::warn!("Delete ignored: {}", err);
                    state
                }
            },

            NotesIntent::ToggleFavorite { id } => match state.book.toggle_favorite(id) {
                Ok(book) => {
                    log_favorites_change(&state.book, &book);
                    NotesState { book, ..state }
                }
                Err(err) => {
                    tracing::warn!("Favorite toggle ignored: {}", err);
                    state
                }
            },

            NotesIntent::BeginEdit { id } => {
                let Some(edit) = state.book.notes().get(id).map(EditSession::begin) else {
                    tracing::warn!(note_id = %id, "Edit ignored: note not found");
                    return state;
                };
                if let Some(previous) = state.edit.target().filter(|prev| *prev != id) {
                    tracing::debug!(note_id = %previous, "Discarding unsaved edits");
                }
                NotesState { edit, ..state }
            }

            NotesIntent::EditField(field) => NotesState {
                edit: state.edit.with_field(field),
                ..state
            },

            NotesIntent::CommitEdit => match state.edit {
                EditSession::Editing { working } => {
                    let id = working.id;
                    let book = match state.book.update(id, working) {
                        Ok(book) => {
                            tracing::info!(note_id = %id, "Note updated");
                            book
                        }
                        Err(err) => {
                            tracing::warn!("Edit dropped: {}", err);
                            state.book
                        }
                    };
                    NotesState {
                        book,
                        edit: EditSession::Idle,
                        draft: state.draft,
                    }
                }
                EditSession::Idle => NotesState {
                    edit: EditSession::Idle,
                    ..state
                },
            },

            NotesIntent::CancelEdit => NotesState {
                edit: EditSession::Idle,
                ..state
            },
        }
    }
}

fn apply_to_draft(mut draft: NoteDraft, field: NoteField) -> NoteDraft {
    match field {
        NoteField::Title(title) => draft.title = title,
        NoteField::Content(content) => draft.content = content,
        NoteField::Label(label) => draft.label = label,
    }
    draft
}

fn log_favorites_change(before: &Notebook, after: &Notebook) {
    if before.favorite_ids() != after.favorite_ids() {
        let ids: Vec<u32> = after.favorite_ids().ids().map(|id| id.0).collect();
        tracing::debug!(favorites = ?ids, "Favorites updated");
    }
}
