//! CLI argument parsing.

mod args;

pub use args::Args;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::online::DEFAULT_ENDPOINT;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["speakpad"]).unwrap();

        assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(args.text_file, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_endpoint_override() {
        let args =
            Args::try_parse_from(["speakpad", "--endpoint", "http://localhost:9280"]).unwrap();

        assert_eq!(args.endpoint, "http://localhost:9280");
    }

    #[test]
    fn test_text_file_and_verbose() {
        let args =
            Args::try_parse_from(["speakpad", "--text-file", "notes.txt", "-v"]).unwrap();

        assert_eq!(args.text_file, Some(PathBuf::from("notes.txt")));
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["speakpad", "--bogus"]).is_err());
    }
}
