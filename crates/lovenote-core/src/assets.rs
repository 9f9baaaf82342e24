//! Photo and audio loading.
//!
//! Assets are read from disk and embedded as base64 data URIs so the
//! webview needs no file server.

use std::path::Path;

use base64::Engine;
use tracing::debug;

use crate::error::{CardError, Result};

/// What an asset is used for, which decides how its MIME type is found
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// Sniffed from content
    Image,
    /// From the file extension, then magic bytes
    Audio,
}

/// Read a file into a `data:` URI
pub fn load_data_uri(path: impl AsRef<Path>, kind: AssetKind) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CardError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mime = match kind {
        AssetKind::Image => image_mime(&bytes),
        AssetKind::Audio => audio_mime(path, &bytes),
    }
    .ok_or_else(|| CardError::UnsupportedAsset(path.display().to_string()))?;

    debug!(path = %path.display(), mime, size = bytes.len(), "embedded asset");
    Ok(data_uri(mime, &bytes))
}

/// Encode bytes as a base64 `data:` URI
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

fn image_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|format| format.to_mime_type())
}

fn audio_mime(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| match ext.as_str() {
            "mp3" => Some("audio/mpeg"),
            "ogg" | "oga" => Some("audio/ogg"),
            "wav" => Some("audio/wav"),
            "m4a" | "mp4" => Some("audio/mp4"),
            "aac" => Some("audio/aac"),
            "flac" => Some("audio/flac"),
            "webm" => Some("audio/webm"),
            _ => None,
        });

    by_extension.or_else(|| match bytes {
        [b'I', b'D', b'3', ..] | [0xFF, 0xFB, ..] | [0xFF, 0xF3, ..] => Some("audio/mpeg"),
        [b'O', b'g', b'g', b'S', ..] => Some("audio/ogg"),
        [b'R', b'I', b'F', b'F', ..] => Some("audio/wav"),
        [b'f', b'L', b'a', b'C', ..] => Some("audio/flac"),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn data_uri_format() {
        assert_eq!(data_uri("audio/mpeg", b"abc"), "data:audio/mpeg;base64,YWJj");
    }

    #[test]
    fn image_mime_sniffed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        // Extension lies; content wins
        let path = dir.path().join("us.jpg");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let uri = load_data_uri(&path, AssetKind::Image).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn audio_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterbg.MP3");
        std::fs::write(&path, b"whatever").unwrap();

        let uri = load_data_uri(&path, AssetKind::Audio).unwrap();
        assert!(uri.starts_with("data:audio/mpeg;base64,"));
    }

    #[test]
    fn audio_mime_from_magic_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track");
        std::fs::write(&path, b"OggS\0\0\0").unwrap();

        let uri = load_data_uri(&path, AssetKind::Audio).unwrap();
        assert!(uri.starts_with("data:audio/ogg;base64,"));
    }

    #[test]
    fn unknown_content_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let err = load_data_uri(&path, AssetKind::Image).unwrap_err();
        assert!(matches!(err, CardError::UnsupportedAsset(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_data_uri("/no/such/letterbg.mp3", AssetKind::Audio).unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
    }
}
