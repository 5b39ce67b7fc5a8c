//! Persisted widget preferences.
//!
//! The last-used language, gender, rate, and format are remembered in a
//! small JSON file so the app reopens the way it was left. Absence or
//! corruption of the file just means defaults.

mod store;

pub use store::{Prefs, PrefsError, PrefsStore};
