//! Grocery to-do list.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Owner name and the partitioned item list
//! - `intent.rs` - Checkbox toggles
//! - `reducer.rs` - State transitions, with a running purchased count check

mod intent;
mod reducer;
mod state;

pub use intent::GroceryIntent;
pub use reducer::GroceryReducer;
pub use state::{GroceryState, DEFAULT_OWNER};
