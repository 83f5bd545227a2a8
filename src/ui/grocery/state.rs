use crate::board::{GroceryItem, GroceryList};
use crate::ui::mvi::UiState;

pub const DEFAULT_OWNER: &str = "Guest";

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryState {
    /// Whose list this is; only used in the title.
    pub owner: String,
    pub list: GroceryList,
}

impl Default for GroceryState {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            list: GroceryList::default(),
        }
    }
}

impl UiState for GroceryState {}

impl GroceryState {
    pub fn new(owner: impl Into<String>, list: GroceryList) -> Self {
        Self {
            owner: owner.into(),
            list,
        }
    }

    pub fn title(&self) -> String {
        format!("{}'s To Do List", self.owner)
    }

    pub fn bought_line(&self) -> String {
        format!("Items bought: {}", self.list.purchased_count())
    }

    pub fn items(&self) -> impl Iterator<Item = &GroceryItem> + '_ {
        self.list.items()
    }
}
