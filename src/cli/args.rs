//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::online::DEFAULT_ENDPOINT;

/// Desktop text-to-speech pad.
#[derive(Parser, Debug)]
#[command(name = "speakpad")]
#[command(about = "Type or load text, speak it offline or online, or save the audio")]
#[command(version)]
pub struct Args {
    /// Base URL of the online synthesis service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Load this UTF-8 text file into the buffer at startup
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
