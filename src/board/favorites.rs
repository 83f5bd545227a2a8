use serde::Serialize;
use std::collections::BTreeSet;

use crate::board::note::NoteId;

/// Set of favorited note ids, kept apart from the notes themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<NoteId>);

impl FavoriteSet {
    pub fn contains(&self, id: NoteId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.0.iter().copied()
    }

    /// Add `id` if absent, remove it if present. Never fails, even for ids
    /// that name no note.
    pub fn toggle(&self, id: NoteId) -> Self {
        let mut ids = self.0.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self(ids)
    }

    pub fn without(&self, id: NoteId) -> Self {
        let mut ids = self.0.clone();
        ids.remove(&id);
        Self(ids)
    }
}

impl FromIterator<NoteId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = NoteId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let set = FavoriteSet::default().toggle(NoteId(3));
        assert!(set.contains(NoteId(3)));
        let set = set.toggle(NoteId(3));
        assert!(set.is_empty());
    }

    #[test]
    fn without_missing_id_is_noop() {
        let set: FavoriteSet = [NoteId(1), NoteId(2)].into_iter().collect();
        assert_eq!(set.without(NoteId(9)), set);
        assert_eq!(set.without(NoteId(1)).ids().collect::<Vec<_>>(), vec![NoteId(2)]);
    }
}
