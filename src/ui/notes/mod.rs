//! Sticky notes board.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Notes, favorites, the new-note form and the edit session
//! - `intent.rs` - User actions (Submit, Delete, ToggleFavorite, BeginEdit, ...)
//! - `reducer.rs` - State transitions (pure apart from logging)
//! - `edit.rs` - The edit session state machine (Idle ⇄ Editing)

mod edit;
mod intent;
mod reducer;
mod state;

pub use edit::{EditSession, NoteField};
pub use intent::NotesIntent;
pub use reducer::NotesReducer;
pub use state::NotesState;
