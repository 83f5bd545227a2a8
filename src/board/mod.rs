//! In-memory list stores behind the notes board and the grocery list.
//!
//! Everything here is a pure value: operations take `&self` and hand back a
//! new value, so any previous version stays valid for comparison or tests.

mod error;
mod favorites;
mod grocery;
mod note;
mod notebook;
mod notes;

pub use error::BoardError;
pub use favorites::FavoriteSet;
pub use grocery::{GroceryItem, GroceryList};
pub use note::{normalize_content, normalize_title, Label, Note, NoteDraft, NoteId, NO_CONTENT, UNTITLED};
pub use notebook::Notebook;
pub use notes::NoteList;
