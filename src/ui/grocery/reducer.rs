use crate::board::GroceryList;
use crate::ui::mvi::Reducer;

use super::intent::GroceryIntent;
use super::state::GroceryState;

pub struct GroceryReducer;

impl Reducer for GroceryReducer {
    type State = GroceryState;
    type Intent = GroceryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GroceryIntent::Toggle { name } => match state.list.toggle(&name) {
                Ok(list) => {
                    check_count(&list);
                    tracing::debug!(
                        item = %name,
                        purchased = list.purchased_count(),
                        "Grocery item toggled"
                    );
                    GroceryState { list, ..state }
                }
                Err(err) => {
                    tracing::warn!("Toggle ignored: {}", err);
                    state
                }
            },
        }
    }
}

/// The running count must match a full scan after every toggle.
fn check_count(list: &GroceryList) {
    let scanned = list.recount();
    debug_assert_eq!(list.purchased_count(), scanned, "purchased count drifted");
    if list.purchased_count() != scanned {
        tracing::error!(
            running = list.purchased_count(),
            scanned,
            "Purchased count drifted from item list"
        );
    }
}
