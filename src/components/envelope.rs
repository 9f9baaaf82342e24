//! Envelope Component
//!
//! The sealed red envelope. Clicking it opens the flap, slides the envelope
//! down and pulls the letter up; all motion is CSS transitions keyed on the
//! `open` class.

use dioxus::prelude::*;
use lovenote_ui::{Icon, IconKind};

use crate::context::{use_session, use_snapshot};

/// CSS classes for the envelope body given whether it is open
pub fn envelope_class(is_open: bool) -> &'static str {
    if is_open {
        "envelope open"
    } else {
        "envelope"
    }
}

/// Clickable envelope with flap, folds, peeking letter and wax seal.
#[component]
pub fn Envelope() -> Element {
    let session = use_session();
    let snapshot = use_snapshot();
    let is_open = snapshot().view.is_open;

    let open_letter = move |_| {
        session.open_envelope();
    };

    rsx! {
        div {
            class: envelope_class(is_open),
            onclick: open_letter,

            // Back of the envelope
            div { class: "envelope-back" }

            // Letter tucked inside, three placeholder lines
            div { class: if is_open { "envelope-letter open" } else { "envelope-letter" },
                div { class: "envelope-letter-lines",
                    div { class: "line full" }
                    div { class: "line two-thirds" }
                    div { class: "line three-quarters" }
                }
            }

            // Front folds
            div { class: "envelope-folds",
                div { class: "fold left" }
                div { class: "fold right" }
            }

            // Top flap, rotates open
            div { class: if is_open { "envelope-flap open" } else { "envelope-flap" },
                if !is_open {
                    div { class: "wax-seal",
                        Icon { kind: IconKind::Heart, size: 16 }
                    }
                }
            }
        }
    }
}
