//! View state flags and the envelope phase derived from them.

use serde::{Deserialize, Serialize};

/// The flags that decide which visual branch of the card is rendered.
///
/// All three start `false` at mount and only change through user actions
/// (directly or via a delayed transition they scheduled).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Envelope flap is open and the envelope has slid down
    pub is_open: bool,
    /// Music was requested to play (intent, not confirmed playback)
    pub is_playing: bool,
    /// The letter overlay is shown
    pub show_letter_content: bool,
}

impl ViewState {
    /// The letter can only be visible on an open envelope.
    pub fn is_consistent(&self) -> bool {
        !self.show_letter_content || self.is_open
    }
}

/// Where the envelope is in its open/close cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardPhase {
    /// Sealed envelope, title visible
    #[default]
    Closed,
    /// Flap open, waiting for the letter reveal
    Opening,
    /// Letter overlay shown
    Open,
    /// Letter hidden, waiting for the envelope to collapse
    Closing,
}

impl CardPhase {
    /// Returns the CSS modifier for this phase
    pub fn class(&self) -> &'static str {
        match self {
            CardPhase::Closed => "phase-closed",
            CardPhase::Opening => "phase-opening",
            CardPhase::Open => "phase-open",
            CardPhase::Closing => "phase-closing",
        }
    }

    /// Whether a delayed transition is outstanding in this phase
    pub fn is_animating(&self) -> bool {
        matches!(self, CardPhase::Opening | CardPhase::Closing)
    }
}

/// Everything a renderer needs from one card session at a point in time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub view: ViewState,
    pub phase: CardPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_all_false() {
        let view = ViewState::default();
        assert!(!view.is_open);
        assert!(!view.is_playing);
        assert!(!view.show_letter_content);
        assert!(view.is_consistent());
    }

    #[test]
    fn letter_without_open_envelope_is_inconsistent() {
        let view = ViewState {
            is_open: false,
            is_playing: false,
            show_letter_content: true,
        };
        assert!(!view.is_consistent());
    }

    #[test]
    fn phase_classes() {
        assert_eq!(CardPhase::Closed.class(), "phase-closed");
        assert_eq!(CardPhase::Opening.class(), "phase-opening");
        assert_eq!(CardPhase::Open.class(), "phase-open");
        assert_eq!(CardPhase::Closing.class(), "phase-closing");
        assert_eq!(CardPhase::default(), CardPhase::Closed);
    }

    #[test]
    fn animating_phases() {
        assert!(CardPhase::Opening.is_animating());
        assert!(CardPhase::Closing.is_animating());
        assert!(!CardPhase::Open.is_animating());
        assert!(!CardPhase::Closed.is_animating());
    }
}
