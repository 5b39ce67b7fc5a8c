//! Preference persistence.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dispatch::{AudioFormat, VoiceGender};
use crate::online::Language;

/// Errors that can occur while reading or writing preferences.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("No saved preferences at {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Widget settings remembered between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prefs {
    pub language: Language,
    pub gender: VoiceGender,
    pub rate: u32,
    pub format: AudioFormat,
    pub updated_at: String,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            language: Language::En,
            gender: VoiceGender::Male,
            rate: 150,
            format: AudioFormat::Mp3,
            updated_at: String::new(),
        }
    }
}

/// Reads and writes the preferences file.
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Create a store at the default location under the home directory.
    pub fn new() -> Self {
        let path = dirs::home_dir()
            .expect("Could not find home directory")
            .join(".speakpad")
            .join("prefs.json");

        Self { path }
    }

    /// Create a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the preferences file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load saved preferences.
    pub fn load(&self) -> Result<Prefs, PrefsError> {
        if !self.path.exists() {
            return Err(PrefsError::NotFound(self.path.clone()));
        }

        let json = std::fs::read_to_string(&self.path)?;
        let prefs = serde_json::from_str(&json)?;

        Ok(prefs)
    }

    /// Write preferences, creating the parent directory if needed.
    pub fn save(&self, prefs: &Prefs) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, json)?;

        Ok(())
    }
}

impl Default for PrefsStore {
    fn default() -> Self {
        Self::new()
    }
}
