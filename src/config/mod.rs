mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{default_groceries, default_notes, Config, UiConfig};
