mod common;

use common::notes_state;
use noteboard::board::{Label, NoteId};
use noteboard::ui::mvi::Reducer;
use noteboard::ui::notes::{EditSession, NoteField, NotesIntent, NotesReducer, NotesState};
use proptest::prelude::*;

fn reduce_all(state: NotesState, intents: Vec<NotesIntent>) -> NotesState {
    intents.into_iter().fold(state, NotesReducer::reduce)
}

#[test]
fn blank_note_gets_placeholders() {
    let state = reduce_all(
        notes_state(2),
        vec![
            NotesIntent::DraftField(NoteField::Title("   ".into())),
            NotesIntent::Submit,
        ],
    );
    let created = state.notes().last().unwrap();
    assert_eq!(created.title, "Untitled");
    assert_eq!(created.content, "No content");
}

#[test]
fn created_ids_are_distinct_and_above_existing() {
    let state = notes_state(4);
    let before_max = state.notes().iter().map(|n| n.id).max().unwrap();
    let state = reduce_all(state, (0..5).map(|_| NotesIntent::Submit).collect());

    let new_ids: Vec<NoteId> = state.notes()[4..].iter().map(|n| n.id).collect();
    assert_eq!(new_ids.len(), 5);
    for (i, id) in new_ids.iter().enumerate() {
        assert!(*id > before_max);
        assert!(!new_ids[..i].contains(id));
    }
}

#[test]
fn switching_edit_target_discards_unsaved_edits() {
    let before = notes_state(3);
    let original_a = before.book.notes().get(NoteId(1)).unwrap().clone();

    let state = reduce_all(
        before,
        vec![
            NotesIntent::BeginEdit { id: NoteId(1) },
            NotesIntent::EditField(NoteField::Title("X".into())),
            NotesIntent::BeginEdit { id: NoteId(2) },
        ],
    );

    assert_eq!(state.book.notes().get(NoteId(1)), Some(&original_a));
    assert_eq!(state.edit.target(), Some(NoteId(2)));
    assert_eq!(state.edit.working().unwrap().title, "note 2");
}

#[test]
fn delete_favorited_note_clears_both() {
    let state = reduce_all(
        notes_state(6),
        vec![
            NotesIntent::ToggleFavorite { id: NoteId(5) },
            NotesIntent::ToggleFavorite { id: NoteId(2) },
            NotesIntent::Delete { id: NoteId(5) },
        ],
    );
    assert!(!state.book.notes().contains(NoteId(5)));
    assert!(!state.book.is_favorite(NoteId(5)));
    let titles: Vec<_> = state.favorites().iter().map(|n| n.title.clone()).collect();
    assert_eq!(titles, vec!["note 2"]);
}

#[test]
fn commit_after_delete_drops_edit() {
    let state = reduce_all(
        notes_state(2),
        vec![
            NotesIntent::BeginEdit { id: NoteId(2) },
            NotesIntent::EditField(NoteField::Label(Label::Work)),
            NotesIntent::Delete { id: NoteId(2) },
            NotesIntent::CommitEdit,
        ],
    );
    assert_eq!(state.edit, EditSession::Idle);
    assert_eq!(state.notes().len(), 1);
}

fn note_id() -> impl Strategy<Value = NoteId> {
    (0u32..12).prop_map(NoteId)
}

fn intent_strategy() -> impl Strategy<Value = NotesIntent> {
    prop_oneof![
        2 => Just(NotesIntent::Submit),
        2 => note_id().prop_map(|id| NotesIntent::Delete { id }),
        3 => note_id().prop_map(|id| NotesIntent::ToggleFavorite { id }),
        2 => note_id().prop_map(|id| NotesIntent::BeginEdit { id }),
        1 => "[a-z ]{0,8}".prop_map(|t| NotesIntent::EditField(NoteField::Title(t))),
        1 => Just(NotesIntent::CommitEdit),
        1 => Just(NotesIntent::CancelEdit),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn favorites_never_dangle(intents in prop::collection::vec(intent_strategy(), 1..80)) {
        let mut state = notes_state(5);
        for intent in intents {
            state = NotesReducer::reduce(state, intent);

            for fav in state.book.favorite_ids().ids() {
                prop_assert!(state.book.notes().contains(fav), "favorite {} has no note", fav);
            }
            let favorites: Vec<NoteId> = state.favorites().iter().map(|n| n.id).collect();
            let expected: Vec<NoteId> = state
                .notes()
                .iter()
                .map(|n| n.id)
                .filter(|id| state.book.is_favorite(*id))
                .collect();
            prop_assert_eq!(favorites, expected);

            let ids: Vec<NoteId> = state.notes().iter().map(|n| n.id).collect();
            let mut unique = ids.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }

    #[test]
    fn created_ids_are_never_reused(intents in prop::collection::vec(intent_strategy(), 1..80)) {
        let mut state = notes_state(5);
        let mut highest = NoteId(5);
        for intent in intents {
            let before: Vec<NoteId> = state.notes().iter().map(|n| n.id).collect();
            state = NotesReducer::reduce(state, intent);
            for note in state.notes() {
                if !before.contains(&note.id) {
                    prop_assert!(note.id > highest, "id {} issued again", note.id);
                    highest = note.id;
                }
            }
        }
    }
}

#[test]
fn favorites_view_is_fresh_after_every_mutation() {
    let state = reduce_all(
        notes_state(3),
        vec![
            NotesIntent::ToggleFavorite { id: NoteId(3) },
            NotesIntent::BeginEdit { id: NoteId(3) },
            NotesIntent::EditField(NoteField::Title("renamed".into())),
        ],
    );
    // not committed yet
    assert_eq!(state.favorites()[0].title, "note 3");

    let state = NotesReducer::reduce(state, NotesIntent::CommitEdit);
    assert_eq!(state.favorites()[0].title, "renamed");
}
