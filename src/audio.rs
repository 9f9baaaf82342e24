//! Webview audio bridge.
//!
//! The `<audio>` element lives in the webview and can only be scripted from
//! inside the Dioxus runtime. [`WebviewAudio`] is the [`AudioSink`] handed
//! to the card session; it forwards commands over a channel to
//! [`run_audio_bridge`], a task spawned in the app scope that runs the
//! scripts and reports how `play()` settled.

use dioxus::prelude::*;
use lovenote_core::{AudioSink, PlayFuture, PlaybackError};
use serde::Deserialize;
use tokio::sync::{mpsc, oneshot};

/// DOM id of the card's audio element
pub const AUDIO_ELEMENT_ID: &str = "card-audio";

const PLAY_SCRIPT: &str = r#"
const audio = document.getElementById("card-audio");
if (!audio) {
  dioxus.send({ ok: false, reason: "audio element missing" });
} else {
  audio.play()
    .then(() => dioxus.send({ ok: true, reason: null }))
    .catch((e) => dioxus.send({ ok: false, reason: String(e) }));
}
"#;

const PAUSE_SCRIPT: &str = r#"
const audio = document.getElementById("card-audio");
if (audio) { audio.pause(); }
"#;

/// Command sent from the session to the bridge
#[derive(Debug)]
pub enum AudioCommand {
    /// Start playback and report the outcome
    Play(oneshot::Sender<Result<(), PlaybackError>>),
    Pause,
}

/// How the webview's `play()` promise settled
#[derive(Debug, Deserialize, PartialEq)]
struct PlayReport {
    ok: bool,
    #[serde(default)]
    reason: Option<String>,
}

impl PlayReport {
    fn into_result(self) -> Result<(), PlaybackError> {
        if self.ok {
            Ok(())
        } else {
            Err(PlaybackError::Prevented(
                self.reason.unwrap_or_else(|| "unknown".to_string()),
            ))
        }
    }
}

/// Audio sink backed by the webview's `<audio>` element
#[derive(Clone)]
pub struct WebviewAudio {
    commands: mpsc::UnboundedSender<AudioCommand>,
}

impl WebviewAudio {
    /// Create the sink and the receiver to pass to [`run_audio_bridge`]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AudioCommand>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        (Self { commands }, receiver)
    }
}

impl AudioSink for WebviewAudio {
    fn play(&self) -> PlayFuture {
        let (reply, outcome) = oneshot::channel();
        if self.commands.send(AudioCommand::Play(reply)).is_err() {
            return Box::pin(async { Err(PlaybackError::Disconnected) });
        }

        Box::pin(async move { outcome.await.unwrap_or(Err(PlaybackError::Disconnected)) })
    }

    fn pause(&self) {
        if self.commands.send(AudioCommand::Pause).is_err() {
            tracing::warn!("Audio bridge closed, pause dropped");
        }
    }
}

/// Play reply still waiting on its script's promise
type PendingPlay<E> = (E, oneshot::Sender<Result<(), PlaybackError>>);

/// Start the script for one command.
///
/// Scripts start in arrival order. A play hands back its running script so
/// the caller can await the outcome without blocking later commands.
fn start_command<E>(
    command: AudioCommand,
    run_script: &mut impl FnMut(&'static str) -> E,
) -> Option<PendingPlay<E>> {
    match command {
        AudioCommand::Pause => {
            let _ = run_script(PAUSE_SCRIPT);
            None
        }
        AudioCommand::Play(reply) => Some((run_script(PLAY_SCRIPT), reply)),
    }
}

/// Execute audio commands until every sink is dropped.
///
/// Must run inside the Dioxus runtime (spawned from a component).
pub async fn run_audio_bridge(mut commands: mpsc::UnboundedReceiver<AudioCommand>) {
    let mut run_script = |js: &'static str| document::eval(js);

    while let Some(command) = commands.recv().await {
        // play() may pend while the track buffers; await it off-loop
        if let Some((eval, reply)) = start_command(command, &mut run_script) {
            spawn(async move {
                let _ = reply.send(play_outcome(eval).await);
            });
        }
    }
    tracing::debug!("Audio bridge stopped");
}

async fn play_outcome(mut eval: document::Eval) -> Result<(), PlaybackError> {
    let report: PlayReport = eval
        .recv()
        .await
        .map_err(|e| PlaybackError::Prevented(format!("{:?}", e)))?;
    report.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_target_audio_element() {
        let selector = format!("getElementById(\"{}\")", AUDIO_ELEMENT_ID);
        assert!(PLAY_SCRIPT.contains(&selector));
        assert!(PAUSE_SCRIPT.contains(&selector));
    }

    #[test]
    fn rejected_report_becomes_prevented() {
        let report: PlayReport =
            serde_json::from_str(r#"{ "ok": false, "reason": "NotAllowedError" }"#).unwrap();
        assert_eq!(
            report.into_result(),
            Err(PlaybackError::Prevented("NotAllowedError".to_string()))
        );
    }

    #[test]
    fn accepted_report_is_ok() {
        let report: PlayReport = serde_json::from_str(r#"{ "ok": true, "reason": null }"#).unwrap();
        assert_eq!(report.into_result(), Ok(()));
    }

    #[tokio::test]
    async fn play_forwards_command_and_reply() {
        let (sink, mut commands) = WebviewAudio::channel();
        let outcome = sink.play();

        match commands.recv().await {
            Some(AudioCommand::Play(reply)) => {
                reply
                    .send(Err(PlaybackError::Prevented("NotAllowedError".to_string())))
                    .unwrap();
            }
            other => panic!("expected play, got {:?}", other),
        }

        assert_eq!(
            outcome.await,
            Err(PlaybackError::Prevented("NotAllowedError".to_string()))
        );
    }

    #[tokio::test]
    async fn closed_bridge_reports_disconnected() {
        let (sink, commands) = WebviewAudio::channel();
        drop(commands);

        assert_eq!(sink.play().await, Err(PlaybackError::Disconnected));
        // Pause on a closed bridge only logs
        sink.pause();
    }

    #[tokio::test]
    async fn dropped_reply_reports_disconnected() {
        let (sink, mut commands) = WebviewAudio::channel();
        let outcome = sink.play();
        drop(commands.recv().await);

        assert_eq!(outcome.await, Err(PlaybackError::Disconnected));
    }

    #[test]
    fn scripts_start_in_command_order() {
        let mut started = Vec::new();
        let mut run_script = |js: &'static str| {
            started.push(js);
            started.len()
        };

        let (play_reply, _play_outcome) = oneshot::channel();
        let pending = start_command(AudioCommand::Play(play_reply), &mut run_script);
        let paused = start_command(AudioCommand::Pause, &mut run_script);

        // The play script is already running before the pause arrives
        assert_eq!(pending.map(|(script, _)| script), Some(1));
        assert!(paused.is_none());
        assert_eq!(started, vec![PLAY_SCRIPT, PAUSE_SCRIPT]);
    }

    #[tokio::test]
    async fn pause_is_forwarded() {
        let (sink, mut commands) = WebviewAudio::channel();
        sink.pause();
        assert!(matches!(commands.recv().await, Some(AudioCommand::Pause)));
    }
}
