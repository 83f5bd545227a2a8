//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use noteboard::board::{GroceryItem, GroceryList, Label, Note, NoteId, NoteList};
use noteboard::ui::grocery::GroceryState;
use noteboard::ui::notes::NotesState;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn note(id: u32, title: &str) -> Note {
    Note {
        id: NoteId(id),
        title: title.to_string(),
        content: format!("{title} content"),
        label: Label::Other,
    }
}

/// Notes state seeded with ids 1..=count.
pub fn notes_state(count: u32) -> NotesState {
    NotesState::new(NoteList::from_notes(
        (1..=count).map(|i| note(i, &format!("note {i}"))).collect(),
    ))
}

pub fn grocery_state(names: &[&str]) -> GroceryState {
    GroceryState::new(
        "Test",
        GroceryList::from_items(names.iter().map(|n| GroceryItem::new(*n)).collect()),
    )
}

pub fn item_names(state: &GroceryState) -> Vec<String> {
    state.items().map(|i| i.name.clone()).collect()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
