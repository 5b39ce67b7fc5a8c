//! The eframe application.

use std::path::PathBuf;

use chrono::Local;
use eframe::egui;
use log::{debug, warn};

use crate::dispatch::{AudioFormat, DispatchError, Dispatcher, ExportRequest, Utterance, VoiceGender};
use crate::offline::OfflineSynth;
use crate::online::{Language, OnlineSynth};
use crate::player::Player;
use crate::prefs::{Prefs, PrefsStore};

/// Widget state plus the dispatcher behind the five buttons.
///
/// Everything runs on the UI thread; each handler blocks until its
/// adapter call returns, so the window freezes for the duration of a
/// synthesis call and no two operations ever overlap.
pub struct SpeakApp<O: OfflineSynth, N: OnlineSynth, P: Player> {
    dispatcher: Dispatcher<O, N, P>,
    prefs_store: PrefsStore,

    text: String,
    gender: VoiceGender,
    rate: u32,
    language: Language,
    format: AudioFormat,
}

impl<O: OfflineSynth, N: OnlineSynth, P: Player> SpeakApp<O, N, P> {
    pub fn new(
        dispatcher: Dispatcher<O, N, P>,
        prefs_store: PrefsStore,
        prefs: Prefs,
        initial_text: Option<String>,
    ) -> Self {
        Self {
            dispatcher,
            prefs_store,
            text: initial_text.unwrap_or_default(),
            gender: prefs.gender,
            rate: prefs.rate,
            language: prefs.language,
            format: prefs.format,
        }
    }

    /// Snapshot the widget state into a synthesis request.
    ///
    /// The text is trimmed for synthesis; the buffer itself is left
    /// untouched.
    fn utterance(&self) -> Utterance {
        Utterance {
            text: self.text.trim().to_string(),
            language: self.language,
            gender: self.gender,
            rate: self.rate,
        }
    }

    fn speak_offline(&mut self) {
        let utterance = self.utterance();
        if let Err(e) = self.dispatcher.speak_offline(&utterance) {
            report(&e);
        }
        self.persist_prefs();
    }

    fn speak_online(&mut self) {
        let utterance = self.utterance();
        match self.dispatcher.speak_online(&utterance) {
            Ok(path) => debug!("playing {}", path.display()),
            Err(e) => report(&e),
        }
        self.persist_prefs();
    }

    fn save_as_file(&mut self) {
        // Check the buffer before bothering the user with a dialog.
        if self.text.trim().is_empty() {
            report(&DispatchError::NothingToSave);
            return;
        }

        let destination = self.prompt_destination();
        self.export_to(destination);
        self.persist_prefs();
    }

    /// Native save dialog with a timestamped suggestion; `None` when the
    /// user cancels.
    fn prompt_destination(&self) -> Option<PathBuf> {
        let extension = self.format.extension();
        let suggested = format!(
            "speech-{}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            extension
        );

        rfd::FileDialog::new()
            .add_filter(self.format.filter_name(), &[extension])
            .set_file_name(suggested)
            .save_file()
    }

    /// Export the current buffer to the chosen destination. A missing
    /// destination is a cancelled dialog: write nothing, show nothing.
    fn export_to(&mut self, destination: Option<PathBuf>) {
        let Some(destination) = destination else {
            return;
        };

        let request = ExportRequest {
            utterance: self.utterance(),
            format: self.format,
            destination: destination.clone(),
        };

        match self.dispatcher.export(&request) {
            Ok(()) => {
                let _ = rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Success")
                    .set_description(format!(
                        "Speech saved as {} file successfully!",
                        self.format.extension().to_uppercase()
                    ))
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
                debug!("saved {}", destination.display());
            }
            Err(e) => report(&e),
        }
    }

    /// Empty the buffer unconditionally.
    fn clear_text(&mut self) {
        self.text.clear();
    }

    fn load_text(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .pick_file()
        else {
            return;
        };

        match self.dispatcher.load_text(&path) {
            // Replace the whole buffer verbatim.
            Ok(content) => self.text = content,
            Err(e) => report(&e),
        }
    }

    fn persist_prefs(&self) {
        let prefs = Prefs {
            language: self.language,
            gender: self.gender,
            rate: self.rate,
            format: self.format,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };
        if let Err(e) = self.prefs_store.save(&prefs) {
            warn!("failed to save preferences: {}", e);
        }
    }
}

impl<O: OfflineSynth, N: OnlineSynth, P: Player> eframe::App for SpeakApp<O, N, P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Speakpad");
            ui.add_space(4.0);

            ui.label("Enter text:");
            ui.add(
                egui::TextEdit::multiline(&mut self.text)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .hint_text("Type text here, or load it from a file"),
            );

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Voice:");
                ui.radio_value(&mut self.gender, VoiceGender::Male, "Male");
                ui.radio_value(&mut self.gender, VoiceGender::Female, "Female");
            });

            ui.add(egui::Slider::new(&mut self.rate, 100..=300).text("Speech rate"));

            egui::ComboBox::from_label("Language (online)")
                .selected_text(self.language.label())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(&mut self.language, language, language.label());
                    }
                });

            egui::ComboBox::from_label("File format")
                .selected_text(self.format.extension())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.format, AudioFormat::Mp3, "mp3");
                    ui.selectable_value(&mut self.format, AudioFormat::Wav, "wav");
                });

            ui.separator();

            ui.horizontal_wrapped(|ui| {
                if ui.button("Load Text From File").clicked() {
                    self.load_text();
                }
                if ui.button("Speak (Offline)").clicked() {
                    self.speak_offline();
                }
                if ui.button("Speak (Online)").clicked() {
                    self.speak_online();
                }
                if ui.button("Save As File").clicked() {
                    self.save_as_file();
                }
                if ui.button("Clear Text").clicked() {
                    self.clear_text();
                }
            });
        });
    }
}

/// Map a dispatch failure onto the matching modal dialog.
///
/// Missing input gets a warning, everything else an error with the
/// underlying message. Nothing here is fatal; the window stays usable.
fn report(error: &DispatchError) {
    let (level, title) = if error.is_user_input() {
        (rfd::MessageLevel::Warning, "Warning")
    } else {
        (rfd::MessageLevel::Error, "Error")
    };

    let _ = rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(error.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
