//! Model-View-Intent primitives shared by the board widgets.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──────── key press ───────────┘
//! ```
//!
//! - **State**: a plain value holding everything a widget draws
//! - **Intent**: one discrete user action
//! - **Reducer**: `(State, Intent) -> State`, the only place state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
