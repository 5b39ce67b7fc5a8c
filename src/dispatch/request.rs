//! Request types gathered from widget state on each button press.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::online::Language;

/// Voice gender selection for the offline engine.
///
/// Maps onto the engine's installed voice list by index: Male is
/// index 0, Female is index 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
}

impl VoiceGender {
    pub fn label(&self) -> &'static str {
        match self {
            VoiceGender::Male => "Male",
            VoiceGender::Female => "Female",
        }
    }
}

/// Audio container format offered by the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    /// Returns the file extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }

    /// Human-readable filter name for the save dialog.
    pub fn filter_name(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "MP3 files",
            AudioFormat::Wav => "WAV files",
        }
    }
}

/// A single synthesis request, built fresh from widget state on every
/// button press and dropped when the triggering call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: Language,
    pub gender: VoiceGender,
    /// Speech rate in the slider's [100, 300] range.
    pub rate: u32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::En,
            gender: VoiceGender::Male,
            rate: 150,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }
}

/// An utterance bound for a user-chosen file instead of the speakers.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub utterance: Utterance,
    pub format: AudioFormat,
    pub destination: PathBuf,
}
