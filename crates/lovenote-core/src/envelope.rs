//! Envelope open/close state machine.
//!
//! Opening and closing each change one flag immediately and schedule a
//! second change after a fixed delay, timed to the CSS animation in front of
//! it:
//!
//! ```text
//! Closed --open--> Opening --800ms--> Open --close--> Closing --300ms--> Closed
//! ```
//!
//! The machine does not sleep itself. It hands back a [`DelayedTransition`]
//! and the caller feeds it to [`Envelope::apply`] once the delay elapsed.
//! Every open/close bumps a generation counter and a transition only applies
//! if the counter still matches, so a close issued before the reveal fires
//! cancels the reveal instead of racing it.

use std::time::Duration;

use tracing::debug;

use crate::view::CardPhase;

/// Delay between opening the flap and revealing the letter
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Delay between hiding the letter and closing the flap
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(300);

/// What a delayed transition does when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Set `show_letter_content = true`
    RevealLetter,
    /// Set `is_open = false`
    CollapseEnvelope,
}

/// A state change scheduled by [`Envelope::open`] or [`Envelope::close`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayedTransition {
    pub kind: TransitionKind,
    /// Generation the transition was issued under
    pub generation: u64,
    /// Minimum time to wait before applying
    pub delay: Duration,
}

/// Envelope half of the view state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Envelope {
    is_open: bool,
    show_letter_content: bool,
    generation: u64,
    pending: Option<TransitionKind>,
}

impl Envelope {
    /// A sealed envelope
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn show_letter_content(&self) -> bool {
        self.show_letter_content
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The transition currently waiting to fire, if any
    pub fn pending(&self) -> Option<TransitionKind> {
        self.pending
    }

    pub fn phase(&self) -> CardPhase {
        match self.pending {
            Some(TransitionKind::RevealLetter) => CardPhase::Opening,
            Some(TransitionKind::CollapseEnvelope) => CardPhase::Closing,
            None if self.is_open => CardPhase::Open,
            None => CardPhase::Closed,
        }
    }

    /// Open the flap.
    ///
    /// No-op while already open (including while closing). Otherwise sets
    /// `is_open` and returns the letter reveal to run after [`REVEAL_DELAY`].
    pub fn open(&mut self) -> Option<DelayedTransition> {
        if self.is_open {
            debug!(generation = self.generation, "envelope already open, ignoring");
            return None;
        }

        self.is_open = true;
        Some(self.schedule(TransitionKind::RevealLetter, REVEAL_DELAY))
    }

    /// Hide the letter.
    ///
    /// No-op on a closed envelope. Otherwise clears `show_letter_content`
    /// and returns the collapse to run after [`COLLAPSE_DELAY`]. Any reveal
    /// still in flight becomes stale.
    pub fn close(&mut self) -> Option<DelayedTransition> {
        if !self.is_open {
            debug!(generation = self.generation, "envelope already closed, ignoring");
            return None;
        }

        self.show_letter_content = false;
        Some(self.schedule(TransitionKind::CollapseEnvelope, COLLAPSE_DELAY))
    }

    /// Apply a transition whose delay has elapsed.
    ///
    /// Returns `false` and changes nothing if another open/close happened
    /// since it was issued.
    pub fn apply(&mut self, transition: DelayedTransition) -> bool {
        if transition.generation != self.generation {
            debug!(
                kind = ?transition.kind,
                issued = transition.generation,
                current = self.generation,
                "dropping stale envelope transition"
            );
            return false;
        }

        match transition.kind {
            TransitionKind::RevealLetter => self.show_letter_content = true,
            TransitionKind::CollapseEnvelope => self.is_open = false,
        }
        self.pending = None;

        debug_assert!(!self.show_letter_content || self.is_open);
        debug!(kind = ?transition.kind, generation = self.generation, "envelope transition applied");
        true
    }

    fn schedule(&mut self, kind: TransitionKind, delay: Duration) -> DelayedTransition {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(kind);
        DelayedTransition {
            kind,
            generation: self.generation,
            delay,
        }
    }
}
