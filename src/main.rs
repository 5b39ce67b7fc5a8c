//! speakpad entry point.

use std::fs;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use log::{debug, info};
use speakpad::cli::Args;
use speakpad::dispatch::Dispatcher;
use speakpad::offline::NativeEngine;
use speakpad::online::create_client;
use speakpad::player::SystemPlayer;
use speakpad::prefs::{Prefs, PrefsStore};
use speakpad::ui::SpeakApp;

fn main() -> Result<()> {
    let args = Args::parse();

    // Verbose mode forces debug logging; otherwise honor RUST_LOG with a
    // quiet floor.
    if args.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }

    info!("speakpad starting");

    // Last-used widget settings; a missing or unreadable file just means
    // defaults.
    let prefs_store = PrefsStore::new();
    let prefs = prefs_store.load().unwrap_or_else(|e| {
        debug!("using default preferences: {}", e);
        Prefs::default()
    });

    let initial_text = args
        .text_file
        .as_deref()
        .map(fs::read_to_string)
        .transpose()
        .context("Failed to read --text-file")?;

    // The offline engine is created once here and owned by the app for
    // the whole process lifetime.
    let offline = NativeEngine::new().context("Failed to initialize the offline speech engine")?;
    let online = create_client(&args.endpoint);

    let dispatcher = Dispatcher::new(offline, online, SystemPlayer);
    let app = SpeakApp::new(dispatcher, prefs_store, prefs, initial_text);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 520.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native("Speakpad", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("Failed to start the UI: {e}"))?;

    Ok(())
}
