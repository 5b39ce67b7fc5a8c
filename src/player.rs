//! Playback through the OS default file association.

use std::io;
use std::path::Path;

use log::debug;

/// Trait for handing an audio file to the platform's player.
///
/// Abstracted so dispatcher tests don't launch a media player.
#[cfg_attr(test, mockall::automock)]
pub trait Player {
    /// Open the file with whatever the OS associates with its extension.
    fn play(&self, path: &Path) -> io::Result<()>;
}

/// Launches files via the platform open mechanism (xdg-open, `open`,
/// `start`).
pub struct SystemPlayer;

impl Player for SystemPlayer {
    fn play(&self, path: &Path) -> io::Result<()> {
        debug!("opening {} with the default handler", path.display());
        open::that(path)
    }
}
