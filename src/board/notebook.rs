//! Notes plus their favorite markers, updated together.

use crate::board::error::BoardError;
use crate::board::favorites::FavoriteSet;
use crate::board::note::{Label, Note, NoteId};
use crate::board::notes::NoteList;

/// Invariant: every id in `favorites` names a note in `notes`, as long as
/// favorites are only toggled for notes that exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notebook {
    notes: NoteList,
    favorites: FavoriteSet,
}

impl Notebook {
    pub fn new(notes: NoteList) -> Self {
        Self {
            notes,
            favorites: FavoriteSet::default(),
        }
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn favorite_ids(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: NoteId) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited notes in collection order. Recomputed on every call.
    pub fn favorites(&self) -> Vec<&Note> {
        self.notes
            .notes()
            .iter()
            .filter(|n| self.favorites.contains(n.id))
            .collect()
    }

    pub fn create(
        &self,
        title: &str,
        content: &str,
        label: Label,
    ) -> Result<(Self, NoteId), BoardError> {
        let (notes, id) = self.notes.create(title, content, label)?;
        Ok((
            Self {
                notes,
                favorites: self.favorites.clone(),
            },
            id,
        ))
    }

    pub fn update(&self, id: NoteId, patch: Note) -> Result<Self, BoardError> {
        Ok(Self {
            notes: self.notes.update(id, patch)?,
            favorites: self.favorites.clone(),
        })
    }

    /// Remove the note and its favorite marker in one step.
    pub fn delete(&self, id: NoteId) -> Result<Self, BoardError> {
        Ok(Self {
            notes: self.notes.delete(id)?,
            favorites: self.favorites.without(id),
        })
    }

    /// Flip the favorite marker. Unknown ids are tolerated by the set but
    /// reported here so a marker never outlives its note.
    pub fn toggle_favorite(&self, id: NoteId) -> Result<Self, BoardError> {
        if !self.notes.contains(id) {
            return Err(BoardError::UnknownNote(id));
        }
        Ok(Self {
            notes: self.notes.clone(),
            favorites: self.favorites.toggle(id),
        })
    }
}
