use serde::{Deserialize, Serialize};

use crate::board::{GroceryItem, Label, Note, NoteId};
use crate::ui::grocery::DEFAULT_OWNER;
use crate::ui::theme::Theme;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    /// Notes on the board at startup.
    #[serde(default = "default_notes")]
    pub notes: Vec<Note>,
    /// Grocery items at startup.
    #[serde(default = "default_groceries")]
    pub groceries: Vec<GroceryItem>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial theme (default: light).
    #[serde(default)]
    pub theme: Theme,
    /// Name shown in the grocery list title (default: "Guest").
    #[serde(default = "default_owner")]
    pub owner: String,
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            owner: default_owner(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            notes: default_notes(),
            groceries: default_groceries(),
        }
    }
}

/// Seed notes shown on a fresh board.
pub fn default_notes() -> Vec<Note> {
    let labels = [
        Label::Other,
        Label::Personal,
        Label::Work,
        Label::Study,
        Label::Personal,
        Label::Work,
    ];
    labels
        .into_iter()
        .zip(1u32..)
        .map(|(label, n)| Note {
            id: NoteId(n),
            title: format!("test note {n} title"),
            content: format!("test note {n} content"),
            label,
        })
        .collect()
}

/// Seed grocery items.
pub fn default_groceries() -> Vec<GroceryItem> {
    vec![GroceryItem::new("Apples"), GroceryItem::new("Bananas")]
}
