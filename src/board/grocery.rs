//! Grocery checklist kept as two runs: unpurchased first, then purchased.

use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Display label and identity key.
    pub name: String,
    #[serde(default)]
    pub is_purchased: bool,
}

impl GroceryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_purchased: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    /// Position in the seed list; orders items within each run.
    rank: usize,
    item: GroceryItem,
}

/// Immutable grocery list.
///
/// Items are always laid out as all unpurchased items followed by all
/// purchased items, each run in seed order, so toggling an item twice puts
/// it back where it started.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroceryList {
    slots: Vec<Slot>,
    purchased: usize,
}

impl GroceryList {
    pub fn from_items(items: Vec<GroceryItem>) -> Self {
        let slots: Vec<Slot> = items
            .into_iter()
            .enumerate()
            .map(|(rank, item)| Slot { rank, item })
            .collect();
        let purchased = slots.iter().filter(|s| s.item.is_purchased).count();
        Self {
            slots: partition(slots),
            purchased,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &GroceryItem> + '_ {
        self.slots.iter().map(|s| &s.item)
    }

    pub fn get(&self, name: &str) -> Option<&GroceryItem> {
        self.items().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Running count of purchased items, adjusted by each toggle.
    pub fn purchased_count(&self) -> usize {
        self.purchased
    }

    /// Purchased items counted by scanning the list.
    pub fn recount(&self) -> usize {
        self.items().filter(|item| item.is_purchased).count()
    }

    /// Flip `is_purchased` on the named item and re-partition the list.
    pub fn toggle(&self, name: &str) -> Result<Self, BoardError> {
        let index = self
            .slots
            .iter()
            .position(|s| s.item.name == name)
            .ok_or_else(|| BoardError::UnknownItem(name.to_string()))?;

        let mut slots = self.slots.clone();
        let now_purchased = !slots[index].item.is_purchased;
        slots[index].item.is_purchased = now_purchased;

        let purchased = if now_purchased {
            self.purchased + 1
        } else {
            self.purchased - 1
        };

        Ok(Self {
            slots: partition(slots),
            purchased,
        })
    }
}

fn partition(mut slots: Vec<Slot>) -> Vec<Slot> {
    // sort_by_key is stable; ranks are unique so ties never happen anyway
    slots.sort_by_key(|s| (s.item.is_purchased, s.rank));
    slots
}

impl Serialize for GroceryList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let items: Vec<&GroceryItem> = self.items().collect();
        let mut state = serializer.serialize_struct("GroceryList", 2)?;
        state.serialize_field("items", &items)?;
        state.serialize_field("purchased_count", &self.purchased)?;
        state.end()
    }
}
