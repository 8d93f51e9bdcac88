//! Client-side persistence and helpers for the Portal console.

pub mod avatar;
pub mod feature_flags;
pub mod festive;
pub mod preferences;

pub use feature_flags::{FlagSource, FlagStore, FlagStoreError, InMemoryFlagStore, JsonFlagStore};
pub use preferences::{PreferencesError, UserPreferences};
