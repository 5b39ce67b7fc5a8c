//! Button-press dispatch.
//!
//! This module is the application's controller: it gathers a request
//! built from widget state, runs the precondition checks, and forwards
//! the request to exactly one adapter.

mod dispatcher;
mod request;

pub use dispatcher::{DispatchError, Dispatcher, PLAYBACK_FILE};
pub use request::{AudioFormat, ExportRequest, Utterance, VoiceGender};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::{MockOfflineSynth, OfflineError};
    use crate::online::{Language, MockOnlineSynth, OnlineError};
    use crate::player::MockPlayer;
    use tempfile::TempDir;

    fn dispatcher_with(
        offline: MockOfflineSynth,
        online: MockOnlineSynth,
        player: MockPlayer,
        dir: &TempDir,
    ) -> Dispatcher<MockOfflineSynth, MockOnlineSynth, MockPlayer> {
        Dispatcher::new(offline, online, player)
            .with_playback_path(dir.path().join(PLAYBACK_FILE))
    }

    fn idle_mocks() -> (MockOfflineSynth, MockOnlineSynth, MockPlayer) {
        let mut offline = MockOfflineSynth::new();
        offline.expect_speak().never();
        let mut online = MockOnlineSynth::new();
        online.expect_synthesize().never();
        let mut player = MockPlayer::new();
        player.expect_play().never();
        (offline, online, player)
    }

    // ===========================================
    // Empty-text preconditions
    // ===========================================

    #[test]
    fn test_speak_offline_empty_text_invokes_no_adapter() {
        let temp_dir = TempDir::new().unwrap();
        let (offline, online, player) = idle_mocks();
        let mut dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        let result = dispatcher.speak_offline(&Utterance::new(""));

        assert!(matches!(result.unwrap_err(), DispatchError::NothingToSpeak));
    }

    #[test]
    fn test_speak_online_whitespace_text_invokes_no_adapter() {
        let temp_dir = TempDir::new().unwrap();
        let (offline, online, player) = idle_mocks();
        let mut dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        let result = dispatcher.speak_online(&Utterance::new("   \n"));

        assert!(matches!(result.unwrap_err(), DispatchError::NothingToSpeak));
        assert!(!temp_dir.path().join(PLAYBACK_FILE).exists());
    }

    #[test]
    fn test_export_empty_text_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let (offline, online, player) = idle_mocks();
        let mut dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        let destination = temp_dir.path().join("out.mp3");
        let request = ExportRequest {
            utterance: Utterance::new("\t"),
            format: AudioFormat::Mp3,
            destination: destination.clone(),
        };

        let result = dispatcher.export(&request);

        assert!(matches!(result.unwrap_err(), DispatchError::NothingToSave));
        assert!(!destination.exists());
    }

    // ===========================================
    // Speak-Offline
    // ===========================================

    #[test]
    fn test_speak_offline_forwards_exact_widget_state() {
        let temp_dir = TempDir::new().unwrap();
        let mut offline = MockOfflineSynth::new();
        offline
            .expect_speak()
            .withf(|u| {
                u.text == "Hello world" && u.gender == VoiceGender::Female && u.rate == 287
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut dispatcher =
            dispatcher_with(offline, MockOnlineSynth::new(), MockPlayer::new(), &temp_dir);

        let utterance = Utterance::new("Hello world")
            .with_gender(VoiceGender::Female)
            .with_rate(287);

        assert!(dispatcher.speak_offline(&utterance).is_ok());
    }

    #[test]
    fn test_speak_offline_engine_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let mut offline = MockOfflineSynth::new();
        offline
            .expect_speak()
            .times(1)
            .returning(|_| Err(OfflineError::Engine("no audio device".to_string())));

        let mut dispatcher =
            dispatcher_with(offline, MockOnlineSynth::new(), MockPlayer::new(), &temp_dir);

        let result = dispatcher.speak_offline(&Utterance::new("Hello"));

        let err = result.unwrap_err();
        assert!(matches!(err, DispatchError::Offline(_)));
        assert!(!err.is_user_input());
    }

    // ===========================================
    // Speak-Online
    // ===========================================

    #[test]
    fn test_speak_online_writes_fixed_file_and_plays_it() {
        let temp_dir = TempDir::new().unwrap();
        let playback = temp_dir.path().join(PLAYBACK_FILE);

        let mut online = MockOnlineSynth::new();
        online
            .expect_synthesize()
            .withf(|text, lang| text == "Bonjour" && *lang == Language::Fr)
            .times(1)
            .returning(|_, _| Ok(b"mp3 audio payload".to_vec()));

        let mut player = MockPlayer::new();
        let expected = playback.clone();
        player
            .expect_play()
            .withf(move |path| path == expected)
            .times(1)
            .returning(|_| Ok(()));

        let mut dispatcher =
            dispatcher_with(MockOfflineSynth::new(), online, player, &temp_dir);

        let utterance = Utterance::new("Bonjour").with_language(Language::Fr);
        let written = dispatcher.speak_online(&utterance).unwrap();

        assert_eq!(written, playback);
        assert_eq!(std::fs::read(&playback).unwrap(), b"mp3 audio payload");
    }

    #[test]
    fn test_speak_online_overwrites_prior_file_idempotently() {
        let temp_dir = TempDir::new().unwrap();
        let playback = temp_dir.path().join(PLAYBACK_FILE);

        let mut online = MockOnlineSynth::new();
        online
            .expect_synthesize()
            .times(2)
            .returning(|_, _| Ok(b"deterministic payload".to_vec()));

        let mut player = MockPlayer::new();
        player.expect_play().times(2).returning(|_| Ok(()));

        let mut dispatcher =
            dispatcher_with(MockOfflineSynth::new(), online, player, &temp_dir);

        let utterance = Utterance::new("Same text");
        dispatcher.speak_online(&utterance).unwrap();
        let first = std::fs::read(&playback).unwrap();
        dispatcher.speak_online(&utterance).unwrap();
        let second = std::fs::read(&playback).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_speak_online_network_failure_leaves_no_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut online = MockOnlineSynth::new();
        online.expect_synthesize().times(1).returning(|_, _| {
            Err(OnlineError::ConnectionFailed(
                "Connection refused".to_string(),
            ))
        });

        let mut player = MockPlayer::new();
        player.expect_play().never();

        let mut dispatcher =
            dispatcher_with(MockOfflineSynth::new(), online, player, &temp_dir);

        let result = dispatcher.speak_online(&Utterance::new("Hello"));

        assert!(matches!(result.unwrap_err(), DispatchError::Online(_)));
        assert!(!temp_dir.path().join(PLAYBACK_FILE).exists());
    }

    #[test]
    fn test_speak_online_player_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();

        let mut online = MockOnlineSynth::new();
        online
            .expect_synthesize()
            .times(1)
            .returning(|_, _| Ok(b"audio".to_vec()));

        let mut player = MockPlayer::new();
        player.expect_play().times(1).returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no handler registered",
            ))
        });

        let mut dispatcher =
            dispatcher_with(MockOfflineSynth::new(), online, player, &temp_dir);

        let result = dispatcher.speak_online(&Utterance::new("Hello"));

        assert!(matches!(result.unwrap_err(), DispatchError::Playback(_)));
    }

    // ===========================================
    // Save-As-File
    // ===========================================

    #[test]
    fn test_export_writes_payload_at_exact_destination() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let mut online = MockOnlineSynth::new();
        online
            .expect_synthesize()
            .withf(|text, lang| text == "Save me" && *lang == Language::De)
            .times(1)
            .returning(|_, _| Ok(b"exported audio".to_vec()));

        let mut dispatcher = dispatcher_with(
            MockOfflineSynth::new(),
            online,
            MockPlayer::new(),
            &temp_dir,
        );

        let request = ExportRequest {
            utterance: Utterance::new("Save me").with_language(Language::De),
            format: AudioFormat::Mp3,
            destination: destination.clone(),
        };

        dispatcher.export(&request).unwrap();

        let written = std::fs::read(&destination).unwrap();
        assert!(!written.is_empty());
        assert_eq!(written, b"exported audio");
    }

    #[test]
    fn test_export_wav_writes_untranscoded_payload() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("out.wav");

        let mut online = MockOnlineSynth::new();
        online
            .expect_synthesize()
            .times(1)
            .returning(|_, _| Ok(b"still mpeg bytes".to_vec()));

        let mut dispatcher = dispatcher_with(
            MockOfflineSynth::new(),
            online,
            MockPlayer::new(),
            &temp_dir,
        );

        let request = ExportRequest {
            utterance: Utterance::new("Hello"),
            format: AudioFormat::Wav,
            destination: destination.clone(),
        };

        dispatcher.export(&request).unwrap();

        // Same bytes the service returned; no transcoding happens.
        assert_eq!(std::fs::read(&destination).unwrap(), b"still mpeg bytes");
    }

    #[test]
    fn test_export_write_failure_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let mut online = MockOnlineSynth::new();
        online
            .expect_synthesize()
            .times(1)
            .returning(|_, _| Ok(b"audio".to_vec()));

        let mut dispatcher = dispatcher_with(
            MockOfflineSynth::new(),
            online,
            MockPlayer::new(),
            &temp_dir,
        );

        let request = ExportRequest {
            utterance: Utterance::new("Hello"),
            format: AudioFormat::Mp3,
            destination: temp_dir.path().join("missing").join("out.mp3"),
        };

        let result = dispatcher.export(&request);

        assert!(matches!(result.unwrap_err(), DispatchError::Io(_)));
    }

    // ===========================================
    // Load-Text
    // ===========================================

    #[test]
    fn test_load_text_returns_exact_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "Hello world").unwrap();

        let (offline, online, player) = idle_mocks();
        let dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        let content = dispatcher.load_text(&path).unwrap();

        // Verbatim replacement: no trimming, no appending.
        assert_eq!(content, "Hello world");
    }

    #[test]
    fn test_load_text_preserves_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let (offline, online, player) = idle_mocks();
        let dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        assert_eq!(dispatcher.load_text(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_load_text_invalid_utf8_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let (offline, online, player) = idle_mocks();
        let dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        let result = dispatcher.load_text(&path);

        assert!(matches!(result.unwrap_err(), DispatchError::Io(_)));
    }

    #[test]
    fn test_load_text_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();

        let (offline, online, player) = idle_mocks();
        let dispatcher = dispatcher_with(offline, online, player, &temp_dir);

        let result = dispatcher.load_text(&temp_dir.path().join("nope.txt"));

        assert!(matches!(result.unwrap_err(), DispatchError::Io(_)));
    }
}
