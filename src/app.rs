use std::sync::Arc;

use dioxus::prelude::*;
use lovenote_core::{AudioSink, CardSession, CardSnapshot};

use crate::audio::{run_audio_bridge, WebviewAudio};
use crate::context::{get_card, SharedCard};
use crate::pages::CardPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the card, the session and its snapshot signal.
#[component]
pub fn App() -> Element {
    let card: SharedCard = use_hook(|| Arc::new(get_card()));

    // One session per mount. The bridge exists even without a track: play()
    // on a source-less <audio> rejects and the session stays optimistic.
    let session = use_hook(|| {
        let (sink, commands) = WebviewAudio::channel();
        spawn(run_audio_bridge(commands));
        let audio: Arc<dyn AudioSink> = Arc::new(sink);
        CardSession::new(audio)
    });

    let mut snapshot: Signal<CardSnapshot> = use_signal(|| session.snapshot());

    // Provide card state to all child components
    use_context_provider(|| card.clone());
    use_context_provider(|| session.clone());
    use_context_provider(|| snapshot);

    // Mirror session updates (including timer-driven ones) into the signal
    use_future(move || {
        let session = session.clone();
        async move {
            let mut updates = session.subscribe();
            loop {
                let latest = *updates.borrow_and_update();
                snapshot.set(latest);
                if updates.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        CardPage {}
    }
}
