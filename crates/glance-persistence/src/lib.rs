//! Durable key-value preference storage for glance.
//!
//! Plays the role the browser's localStorage plays for the original
//! client: a small string key-value store surviving across sessions.
//! Backed by a single JSON file, read once at load and rewritten on
//! each set.

pub mod error;
pub mod prefs;
pub mod theme;

pub use error::{PersistenceError, PersistenceResult};
pub use prefs::PrefStore;
pub use theme::ThemeStore;
