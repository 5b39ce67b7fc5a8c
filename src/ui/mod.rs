//! GUI surface.
//!
//! A single-window eframe app: text area, voice and rate controls,
//! language and format menus, and the five operation buttons. Rendering
//! stays thin; all behavior lives in the dispatcher.

mod app;

pub use app::SpeakApp;
