// Page content: built-in literals plus an optional TOML override file.
// Loaded once at startup and shared read-only behind `Arc`.

pub mod defaults;
pub mod loader;

pub use loader::load_content;
