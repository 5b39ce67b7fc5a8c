//! Dispatcher implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::offline::{OfflineError, OfflineSynth};
use crate::online::{OnlineError, OnlineSynth};
use crate::player::Player;

use super::request::{AudioFormat, ExportRequest, Utterance};

/// Fixed filename the Speak-Online payload is written to before playback.
/// A prior file of the same name is overwritten without ceremony.
pub const PLAYBACK_FILE: &str = "speech.mp3";

/// Errors that can occur while dispatching a button press.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Please enter some text to speak.")]
    NothingToSpeak,

    #[error("Please enter some text to save.")]
    NothingToSave,

    #[error("Failed to speak text: {0}")]
    Offline(#[from] OfflineError),

    #[error("Failed to convert text to speech: {0}")]
    Online(#[from] OnlineError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to play audio file: {0}")]
    Playback(io::Error),
}

impl DispatchError {
    /// True for missing-input conditions that warrant a warning dialog
    /// rather than an error dialog.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DispatchError::NothingToSpeak | DispatchError::NothingToSave
        )
    }
}

/// Routes each button press to exactly one adapter.
///
/// Owns the adapters for the lifetime of the application. Every method is
/// synchronous and runs on the UI thread; at most one operation is ever
/// in flight.
pub struct Dispatcher<O: OfflineSynth, N: OnlineSynth, P: Player> {
    offline: O,
    online: N,
    player: P,
    playback_path: PathBuf,
}

impl<O: OfflineSynth, N: OnlineSynth, P: Player> Dispatcher<O, N, P> {
    /// Create a dispatcher writing online playback audio to
    /// [`PLAYBACK_FILE`] in the working directory.
    pub fn new(offline: O, online: N, player: P) -> Self {
        Self {
            offline,
            online,
            player,
            playback_path: PathBuf::from(PLAYBACK_FILE),
        }
    }

    /// Override the playback file location.
    pub fn with_playback_path(mut self, path: PathBuf) -> Self {
        self.playback_path = path;
        self
    }

    /// Get the playback file location.
    pub fn playback_path(&self) -> &Path {
        &self.playback_path
    }

    /// Speak through the local engine, blocking until playback finishes.
    pub fn speak_offline(&mut self, utterance: &Utterance) -> Result<(), DispatchError> {
        require_text(&utterance.text, DispatchError::NothingToSpeak)?;

        debug!(
            "speak offline: gender={} rate={}",
            utterance.gender.label(),
            utterance.rate
        );
        self.offline.speak(utterance)?;
        Ok(())
    }

    /// Synthesize remotely, write the fixed playback file, and hand it to
    /// the OS player. Returns the path that was written.
    pub fn speak_online(&mut self, utterance: &Utterance) -> Result<PathBuf, DispatchError> {
        require_text(&utterance.text, DispatchError::NothingToSpeak)?;

        let audio = self
            .online
            .synthesize(&utterance.text, utterance.language)?;

        fs::write(&self.playback_path, &audio)?;
        debug!(
            "wrote {} bytes to {}",
            audio.len(),
            self.playback_path.display()
        );

        self.player
            .play(&self.playback_path)
            .map_err(DispatchError::Playback)?;

        Ok(self.playback_path.clone())
    }

    /// Synthesize remotely and write the payload to the chosen destination.
    pub fn export(&mut self, request: &ExportRequest) -> Result<(), DispatchError> {
        require_text(&request.utterance.text, DispatchError::NothingToSave)?;

        // The service produces MPEG audio regardless of the chosen
        // extension; a .wav destination gets mp3 bytes. Kept as-is from
        // the original behavior rather than transcoding.
        if request.format == AudioFormat::Wav {
            warn!("service returns MPEG audio; saving with a .wav extension without transcoding");
        }

        let audio = self
            .online
            .synthesize(&request.utterance.text, request.utterance.language)?;

        fs::write(&request.destination, &audio)?;
        debug!(
            "exported {} bytes to {}",
            audio.len(),
            request.destination.display()
        );
        Ok(())
    }

    /// Read a UTF-8 text file for the Load operation.
    ///
    /// A decoding failure surfaces as an error the UI reports, not a
    /// panic; the buffer is only replaced on success.
    pub fn load_text(&self, path: &Path) -> Result<String, DispatchError> {
        let content = fs::read_to_string(path)?;
        debug!("loaded {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}

/// Reject empty or whitespace-only text before any adapter is invoked,
/// with the wording that matches the pressed button.
fn require_text(text: &str, missing: DispatchError) -> Result<(), DispatchError> {
    if text.trim().is_empty() {
        return Err(missing);
    }
    Ok(())
}
