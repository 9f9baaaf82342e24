//! Letter Modal Component
//!
//! Full-screen overlay with the opened letter: photo, salutation, body,
//! signature. Clicking the backdrop or the close button hides it; clicks on
//! the paper itself are swallowed so they neither close the letter nor reach
//! the envelope underneath.

use dioxus::prelude::*;
use lovenote_ui::{CloseButton, Icon, IconKind};

use crate::context::{use_card, use_session};

/// Letter Modal
///
/// Rendered only while `show_letter_content` is set.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if snapshot().view.show_letter_content {
///         LetterModal {}
///     }
/// }
/// ```
#[component]
pub fn LetterModal() -> Element {
    let card = use_card();
    let session = use_session();

    let close_from_backdrop = {
        let session = session.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            session.close_letter();
        }
    };

    let letter = &card.letter;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: close_from_backdrop,

            div {
                class: "letter-paper",
                onclick: move |e| e.stop_propagation(),

                // Paper grain
                div { class: "paper-texture" }

                CloseButton { onclick: move |_| session.close_letter() }

                div { class: "letter-content",
                    div { class: "photo-frame",
                        if let Some(ref photo) = card.photo {
                            img { class: "photo", src: "{photo}", alt: "{letter.photo_alt}" }
                        } else {
                            div { class: "photo-placeholder", "{letter.photo_alt}" }
                        }
                    }

                    div { class: "letter-text",
                        h2 { class: "letter-salutation", "{letter.salutation}" }
                        div {
                            class: "letter-body",
                            dangerous_inner_html: "{card.body_html}",
                        }
                        p { class: "letter-signature",
                            "{letter.closing}"
                            br {}
                            "{letter.signature}"
                        }
                    }

                    div { class: "letter-ornament",
                        Icon { kind: IconKind::Snowflake, size: 24 }
                    }
                }
            }
        }
    }
}
