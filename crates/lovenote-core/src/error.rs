//! Error types for Lovenote

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the card's configuration and assets
#[derive(Error, Debug)]
pub enum CardError {
    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The card file is not valid JSON for a card
    #[error("Invalid card file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Asset content could not be mapped to a MIME type
    #[error("Unsupported asset: {0}")]
    UnsupportedAsset(String),
}

/// Errors from a playback request
///
/// These are logged and dropped; they never change the displayed state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The environment refused to start playback (autoplay policy etc.)
    #[error("Playback prevented: {0}")]
    Prevented(String),

    /// The audio element is gone or its command channel closed
    #[error("Audio bridge disconnected")]
    Disconnected,
}

/// Result type alias for card loading operations
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_error_messages() {
        let err = PlaybackError::Prevented("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "Playback prevented: NotAllowedError");
        assert_eq!(
            PlaybackError::Disconnected.to_string(),
            "Audio bridge disconnected"
        );
    }

    #[test]
    fn io_error_names_path() {
        let err = CardError::Io {
            path: PathBuf::from("missing/us.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing/us.jpg"));
    }
}
