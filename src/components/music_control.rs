//! Music Control Component
//!
//! Round button in the top-right corner plus the hidden looping `<audio>`
//! element it drives. The element has no `src` when the track failed to
//! load. Shows a pause icon while music is meant to be
//! playing, a note otherwise.

use dioxus::prelude::*;
use lovenote_ui::{ButtonVariant, Icon, IconButton, IconKind};

use crate::audio::AUDIO_ELEMENT_ID;
use crate::context::{use_card, use_session, use_snapshot};

/// Icon and accessible label for the music button
pub fn music_button_face(is_playing: bool) -> (IconKind, &'static str) {
    if is_playing {
        (IconKind::Pause, "Pause music")
    } else {
        (IconKind::Music, "Play music")
    }
}

#[component]
pub fn MusicControl() -> Element {
    let card = use_card();
    let session = use_session();
    let snapshot = use_snapshot();

    let (icon, label) = music_button_face(snapshot().view.is_playing);

    rsx! {
        div { class: "music-control",
            IconButton {
                variant: ButtonVariant::Glass,
                aria_label: label.to_string(),
                onclick: move |_| session.toggle_music(),
                Icon { kind: icon, size: 20 }
            }

            // Always present so play() has an element to reject from
            audio {
                id: AUDIO_ELEMENT_ID,
                src: card.audio.clone(),
                preload: "auto",
                "loop": "true",
            }
        }
    }
}
