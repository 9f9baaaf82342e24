//! Card page - the whole greeting card.
//!
//! Snow in the back, the music button in the corner, the envelope in the
//! middle and the letter overlay on top once it is revealed.

use dioxus::prelude::*;
use lovenote_core::CardSnapshot;
use lovenote_ui::{use_snowfall, SnowLayer};

use crate::components::{Envelope, LetterModal, MusicControl};
use crate::context::{use_card, use_snapshot};

/// Card page component.
#[component]
pub fn CardPage() -> Element {
    let card = use_card();
    let snapshot = use_snapshot();

    // Drawn once per mount, kept across re-renders
    let snowfall = use_snowfall();

    let CardSnapshot { view, phase } = snapshot();
    let phase_class = phase.class();

    rsx! {
        div { class: "card-page {phase_class}",
            SnowLayer { snowfall: snowfall.clone() }

            MusicControl {}

            main { class: "card-stage",
                // Title (only visible while closed)
                h1 {
                    class: if view.is_open { "card-title faded" } else { "card-title" },
                    "{card.letter.title}"
                }

                Envelope {}
            }

            if view.show_letter_content {
                LetterModal {}
            }

            footer { class: "card-footer", "{card.letter.footer}" }
        }
    }
}
