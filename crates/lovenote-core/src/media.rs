//! Background music control.
//!
//! [`MediaController`] tracks whether music was *requested* to play. The flag
//! is set before the play request resolves and is never corrected if the
//! request is rejected, so the play/pause icon shows intent rather than
//! verified output.

use futures::future::BoxFuture;

use crate::error::PlaybackError;

/// Outcome of a play request, resolved by the audio backend
pub type PlayFuture = BoxFuture<'static, Result<(), PlaybackError>>;

/// A single looping audio track that can be started and paused.
///
/// Implementations must make `pause` take effect synchronously. `play` may
/// complete later; a rejection is reported through the returned future.
pub trait AudioSink: Send + Sync + 'static {
    /// Request playback from the current position
    fn play(&self) -> PlayFuture;

    /// Pause playback
    fn pause(&self);
}

/// What the controller wants done to the audio sink
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

/// Play/pause intent for the background track
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaController {
    is_playing: bool,
}

impl MediaController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Flip between playing and paused, returning the command to execute.
    pub fn toggle(&mut self) -> MediaCommand {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            MediaCommand::Play
        } else {
            MediaCommand::Pause
        }
    }

    /// Start playback unless it is already running.
    pub fn ensure_playing(&mut self) -> Option<MediaCommand> {
        if self.is_playing {
            return None;
        }
        self.is_playing = true;
        Some(MediaCommand::Play)
    }
}
