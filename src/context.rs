//! Card context provider for Lovenote.
//!
//! Provides the loaded card, the card session and its reactive snapshot to
//! all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let session = use_session();
//! let snapshot = use_snapshot();
//!
//! if snapshot().view.is_open { /* ... */ }
//! session.open_envelope();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use lovenote_core::{load_data_uri, AssetKind, CardConfig, CardSession, CardSnapshot, Letter};

/// Letter text and embedded assets, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedCard {
    pub letter: Letter,
    /// Letter body rendered from Markdown
    pub body_html: String,
    /// Photo data URI; `None` renders a placeholder frame
    pub photo: Option<String>,
    /// Music data URI; `None` disables music
    pub audio: Option<String>,
}

impl LoadedCard {
    /// Read the card's assets. Unreadable assets are logged and left out.
    pub fn load(config: &CardConfig) -> Self {
        let photo = match load_data_uri(&config.photo, AssetKind::Image) {
            Ok(uri) => Some(uri),
            Err(e) => {
                tracing::warn!("Photo unavailable, showing placeholder: {}", e);
                None
            }
        };

        let audio = match load_data_uri(&config.audio, AssetKind::Audio) {
            Ok(uri) => Some(uri),
            Err(e) => {
                tracing::warn!("Music unavailable, toggle disabled: {}", e);
                None
            }
        };

        Self {
            body_html: config.letter.body_html(),
            letter: config.letter.clone(),
            photo,
            audio,
        }
    }
}

/// Shared card type for context.
///
/// Wrapped in Arc since the embedded assets can be megabytes.
pub type SharedCard = Arc<LoadedCard>;

/// Get the card loaded at startup.
pub fn get_card() -> LoadedCard {
    crate::get_card()
}

/// Hook to access the loaded card from context.
pub fn use_card() -> SharedCard {
    use_context::<SharedCard>()
}

/// Hook to access the card session from context.
///
/// Event handlers call its methods; rendering reads [`use_snapshot`].
pub fn use_session() -> CardSession {
    use_context::<CardSession>()
}

/// Hook to read the latest session snapshot.
///
/// Returns a reactive signal that updates on every state change, including
/// the ones made by delayed transitions.
pub fn use_snapshot() -> Signal<CardSnapshot> {
    use_context::<Signal<CardSnapshot>>()
}
