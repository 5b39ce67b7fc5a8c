//! Offline engine backed by the `tts` crate.
//!
//! The crate binds the platform synthesizer directly: Speech Dispatcher
//! on Linux, AVFoundation on macOS, SAPI on Windows.

use std::thread;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;
use tts::Tts;

use super::OfflineSynth;
use crate::dispatch::{Utterance, VoiceGender};

/// Poll interval while waiting for playback to finish.
const SPEECH_POLL: Duration = Duration::from_millis(50);

/// Errors reported by the offline engine.
#[derive(Error, Debug)]
pub enum OfflineError {
    #[error("Failed to initialize speech engine: {0}")]
    Init(String),

    #[error("Speech engine error: {0}")]
    Engine(String),

    #[error("Voice index {index} not installed (engine reports {available} voices)")]
    VoiceUnavailable { index: usize, available: usize },
}

/// Local synthesizer owned for the lifetime of the application.
///
/// Created once at startup and reused for every Speak-Offline press;
/// each call re-applies voice and rate from the current widget state.
pub struct NativeEngine {
    tts: Tts,
}

impl NativeEngine {
    /// Initialize the platform speech engine.
    pub fn new() -> Result<Self, OfflineError> {
        debug!("initializing offline engine for {}", std::env::consts::OS);

        let tts = Tts::default().map_err(|e| OfflineError::Init(e.to_string()))?;

        Ok(Self { tts })
    }

    /// Select the installed voice matching the requested gender.
    ///
    /// Assumes the conventional two-voice ordering (Male first, Female
    /// second); the installed set is not verified beyond the index lookup.
    fn apply_voice(&mut self, gender: VoiceGender) -> Result<(), OfflineError> {
        let features = self.tts.supported_features();
        if !features.voice {
            warn!("voice selection not supported on this platform");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| OfflineError::Engine(e.to_string()))?;

        let index = voice_index(gender);
        let voice = voices
            .get(index)
            .ok_or(OfflineError::VoiceUnavailable {
                index,
                available: voices.len(),
            })?;

        debug!("selecting voice {} for {}", index, gender.label());
        self.tts
            .set_voice(voice)
            .map_err(|e| OfflineError::Engine(e.to_string()))
    }

    /// Apply the slider rate, scaled to the engine's own range.
    fn apply_rate(&mut self, rate: u32) -> Result<(), OfflineError> {
        let features = self.tts.supported_features();
        if !features.rate {
            warn!("rate control not supported on this platform");
            return Ok(());
        }

        let scaled = scale_rate(
            rate,
            self.tts.min_rate(),
            self.tts.normal_rate(),
            self.tts.max_rate(),
        );
        debug!("setting rate {} (engine value {:.2})", rate, scaled);

        self.tts
            .set_rate(scaled)
            .map_err(|e| OfflineError::Engine(e.to_string()))
    }

    /// Block until the engine reports playback has finished.
    fn wait_until_done(&mut self) -> Result<(), OfflineError> {
        let features = self.tts.supported_features();
        if !features.is_speaking {
            warn!("engine cannot report playback progress; returning immediately");
            return Ok(());
        }

        loop {
            let speaking = self
                .tts
                .is_speaking()
                .map_err(|e| OfflineError::Engine(e.to_string()))?;
            if !speaking {
                return Ok(());
            }
            thread::sleep(SPEECH_POLL);
        }
    }
}

impl OfflineSynth for NativeEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), OfflineError> {
        self.apply_voice(utterance.gender)?;
        self.apply_rate(utterance.rate)?;

        debug!("speaking {} chars", utterance.text.chars().count());
        self.tts
            .speak(&utterance.text, true)
            .map_err(|e| OfflineError::Engine(e.to_string()))?;

        self.wait_until_done()
    }
}

/// Voice list index for a gender: Male is 0, Female is 1.
pub(crate) fn voice_index(gender: VoiceGender) -> usize {
    match gender {
        VoiceGender::Male => 0,
        VoiceGender::Female => 1,
    }
}

/// Map the slider's [100, 300] range onto the engine's rate range.
///
/// 200 lands on the engine's normal rate; the halves below and above are
/// scaled linearly onto [min, normal] and [normal, max]. Out-of-range
/// input is clamped.
pub(crate) fn scale_rate(rate: u32, min: f32, normal: f32, max: f32) -> f32 {
    let rate = rate.clamp(100, 300) as f32;
    if rate <= 200.0 {
        min + (rate - 100.0) / 100.0 * (normal - min)
    } else {
        normal + (rate - 200.0) / 100.0 * (max - normal)
    }
}
