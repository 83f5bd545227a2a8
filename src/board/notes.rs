//! Ordered note collection with stable, never-reused ids.

use crate::board::error::BoardError;
use crate::board::note::{normalize_content, normalize_title, Label, Note, NoteId};

/// Immutable list of notes. Every operation returns a new list.
///
/// `high_water` is the largest id ever issued (or seeded), so an id freed by
/// deleting the newest note is not handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteList {
    notes: Vec<Note>,
    high_water: u32,
}

impl NoteList {
    /// Build a list from seed notes, keeping their order.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let high_water = notes.iter().map(|n| n.id.0).max().unwrap_or(0);
        Self { notes, high_water }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    /// Id the next `create` will assign, or `None` once `u32::MAX` is taken.
    pub fn next_id(&self) -> Option<NoteId> {
        let max_live = self.notes.iter().map(|n| n.id.0).max().unwrap_or(0);
        max_live.max(self.high_water).checked_add(1).map(NoteId)
    }

    /// Append a note built from raw form input. Blank title/content become
    /// placeholders; only an exhausted id space is rejected.
    pub fn create(
        &self,
        title: &str,
        content: &str,
        label: Label,
    ) -> Result<(Self, NoteId), BoardError> {
        let id = self
            .next_id()
            .ok_or(BoardError::IdsExhausted(NoteId(self.high_water)))?;
        let mut notes = self.notes.clone();
        notes.push(Note {
            id,
            title: normalize_title(title),
            content: normalize_content(content),
            label,
        });
        Ok((
            Self {
                notes,
                high_water: id.0,
            },
            id,
        ))
    }

    /// Replace the note with `id` by `patch`. The stored id is always `id`.
    pub fn update(&self, id: NoteId, patch: Note) -> Result<Self, BoardError> {
        let index = self.position(id)?;
        let mut notes = self.notes.clone();
        notes[index] = Note { id, ..patch };
        Ok(Self {
            notes,
            high_water: self.high_water,
        })
    }

    pub fn delete(&self, id: NoteId) -> Result<Self, BoardError> {
        self.position(id)?;
        let notes = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        Ok(Self {
            notes,
            high_water: self.high_water,
        })
    }

    fn position(&self, id: NoteId) -> Result<usize, BoardError> {
        self.notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(BoardError::UnknownNote(id))
    }
}
