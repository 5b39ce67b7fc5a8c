//! Offline speech synthesis through the platform engine.
//!
//! The Speak-Offline operation goes through the trait defined here; the
//! real implementation wraps the `tts` crate and blocks until playback
//! completes.

mod engine;

pub use engine::{NativeEngine, OfflineError};

use crate::dispatch::Utterance;

/// Trait for the local, blocking synthesizer.
///
/// Abstracts the platform engine so the dispatcher can be tested against
/// a mock implementation.
#[cfg_attr(test, mockall::automock)]
pub trait OfflineSynth {
    /// Speak the utterance through the default output device, blocking
    /// until playback finishes.
    ///
    /// The voice is chosen from the utterance's gender, the rate is taken
    /// verbatim from the utterance; the language field is ignored by the
    /// local engine.
    fn speak(&mut self, utterance: &Utterance) -> Result<(), OfflineError>;
}
