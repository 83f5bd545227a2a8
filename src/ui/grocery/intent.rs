use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroceryIntent {
    /// Flip the purchased checkbox of the named item.
    Toggle { name: String },
}

impl Intent for GroceryIntent {}
