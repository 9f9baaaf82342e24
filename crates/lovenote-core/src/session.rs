//! Card session: the single owner of the card's state.
//!
//! [`CardSession`] combines the [`Envelope`] machine and the
//! [`MediaController`], executes media commands against an
//! [`AudioSink`] and runs delayed envelope transitions as tokio timers.
//! Every state change is published as a [`CardSnapshot`] over a `watch`
//! channel for the renderer.
//!
//! Session methods spawn tokio tasks and must be called from within a tokio
//! runtime.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::envelope::{DelayedTransition, Envelope};
use crate::media::{AudioSink, MediaCommand, MediaController};
use crate::view::{CardPhase, CardSnapshot, ViewState};

#[derive(Default)]
struct SessionState {
    envelope: Envelope,
    media: MediaController,
}

impl SessionState {
    fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            view: ViewState {
                is_open: self.envelope.is_open(),
                is_playing: self.media.is_playing(),
                show_letter_content: self.envelope.show_letter_content(),
            },
            phase: self.envelope.phase(),
        }
    }
}

struct Inner {
    state: Mutex<SessionState>,
    audio: Arc<dyn AudioSink>,
    updates: watch::Sender<CardSnapshot>,
}

/// Shared handle to one mounted card.
///
/// Cloning is cheap; all clones drive the same state.
#[derive(Clone)]
pub struct CardSession {
    inner: Arc<Inner>,
}

impl CardSession {
    /// Create a session with everything closed and paused.
    ///
    /// A sink whose track failed to load still has to be passed; its play
    /// requests reject and the session stays optimistic about them.
    pub fn new(audio: Arc<dyn AudioSink>) -> Self {
        let (updates, _) = watch::channel(CardSnapshot::default());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(SessionState::default()),
                audio,
                updates,
            }),
        }
    }

    pub fn view(&self) -> ViewState {
        self.snapshot().view
    }

    pub fn phase(&self) -> CardPhase {
        self.snapshot().phase
    }

    pub fn snapshot(&self) -> CardSnapshot {
        self.inner.state.lock().snapshot()
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<CardSnapshot> {
        self.inner.updates.subscribe()
    }

    /// Envelope clicked.
    ///
    /// Opens the flap now, starts the music if it is not already playing and
    /// reveals the letter after [`crate::REVEAL_DELAY`]. Ignored while open.
    pub fn open_envelope(&self) {
        let (reveal, command) = {
            let mut state = self.inner.state.lock();
            let Some(reveal) = state.envelope.open() else {
                return;
            };
            let command = state.media.ensure_playing();
            self.inner.updates.send_replace(state.snapshot());
            (reveal, command)
        };

        info!(generation = reveal.generation, "envelope opened");
        if let Some(command) = command {
            self.execute(command);
        }
        self.schedule(reveal);
    }

    /// Close button or backdrop clicked.
    ///
    /// Hides the letter now and closes the flap after
    /// [`crate::COLLAPSE_DELAY`]. Music keeps playing.
    pub fn close_letter(&self) {
        let collapse = {
            let mut state = self.inner.state.lock();
            let Some(collapse) = state.envelope.close() else {
                return;
            };
            self.inner.updates.send_replace(state.snapshot());
            collapse
        };

        info!(generation = collapse.generation, "letter closed");
        self.schedule(collapse);
    }

    /// Music button clicked.
    ///
    /// Pauses synchronously when playing. When paused, requests playback and
    /// marks the session playing whether or not the request succeeds.
    pub fn toggle_music(&self) {
        let command = {
            let mut state = self.inner.state.lock();
            let command = state.media.toggle();
            self.inner.updates.send_replace(state.snapshot());
            command
        };

        debug!(?command, "music toggled");
        self.execute(command);
    }

    fn execute(&self, command: MediaCommand) {
        let audio = &self.inner.audio;
        match command {
            MediaCommand::Pause => audio.pause(),
            MediaCommand::Play => {
                let request = audio.play();
                tokio::spawn(async move {
                    if let Err(e) = request.await {
                        warn!(error = %e, "playback request rejected");
                    }
                });
            }
        }
    }

    fn schedule(&self, transition: DelayedTransition) {
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let deadline = Instant::now() + transition.delay;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let Some(inner) = inner.upgrade() else {
                debug!(kind = ?transition.kind, "session dropped before transition fired");
                return;
            };

            let mut state = inner.state.lock();
            if state.envelope.apply(transition) {
                inner.updates.send_replace(state.snapshot());
            }
        });
    }
}

impl std::fmt::Debug for CardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardSession")
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use crate::media::PlayFuture;

    /// What the webview reports for an `<audio>` element without a source
    struct MissingTrack;

    impl AudioSink for MissingTrack {
        fn play(&self) -> PlayFuture {
            Box::pin(async {
                Err(PlaybackError::Prevented(
                    "NotSupportedError: no supported sources".to_string(),
                ))
            })
        }

        fn pause(&self) {}
    }

    fn session() -> CardSession {
        CardSession::new(Arc::new(MissingTrack))
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn open_with_missing_track_still_marks_playing() {
        let session = session();
        session.open_envelope();
        settle().await;

        let view = session.view();
        assert!(view.is_open);
        assert!(view.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_with_missing_track_flips_flag() {
        let session = session();

        session.toggle_music();
        settle().await;
        assert!(session.view().is_playing);

        session.toggle_music();
        assert!(!session.view().is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_changes() {
        let session = session();
        let mut updates = session.subscribe();

        session.open_envelope();
        updates.changed().await.unwrap();
        let snapshot = *updates.borrow_and_update();
        assert!(snapshot.view.is_open);
        assert_eq!(snapshot.phase, CardPhase::Opening);
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_state() {
        let session = session();
        let other = session.clone();

        other.open_envelope();
        assert!(session.view().is_open);
    }
}
