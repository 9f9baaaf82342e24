//! Property-based tests for the card state machine and snowfall
//!
//! Uses proptest to check invariants under arbitrary interleavings of user
//! actions and elapsed time.

use std::sync::Arc;
use std::time::Duration;

use lovenote_core::{
    AudioSink, CardSession, Envelope, PlayFuture, PlaybackError, Snowfall, SNOWFLAKE_COUNT,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Things a user (or the clock) can do to a card
#[derive(Debug, Clone)]
enum CardOp {
    Open,
    Close,
    ToggleMusic,
    Elapse(u64),
}

fn card_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CardOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(CardOp::Open),
            2 => Just(CardOp::Close),
            1 => Just(CardOp::ToggleMusic),
            3 => (0..1200u64).prop_map(CardOp::Elapse),
        ],
        0..max_ops,
    )
}

/// Sink whose play requests are always refused
struct RefusingSink;

impl AudioSink for RefusingSink {
    fn play(&self) -> PlayFuture {
        Box::pin(async { Err(PlaybackError::Prevented("NotAllowedError".to_string())) })
    }

    fn pause(&self) {}
}

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("runtime")
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The letter is never visible on a closed envelope
    #[test]
    fn letter_implies_open_envelope(ops in card_ops_strategy(40)) {
        let rt = paused_runtime();
        rt.block_on(async {
            let session = CardSession::new(Arc::new(RefusingSink));

            for op in &ops {
                match op {
                    CardOp::Open => session.open_envelope(),
                    CardOp::Close => session.close_letter(),
                    CardOp::ToggleMusic => session.toggle_music(),
                    CardOp::Elapse(ms) => {
                        tokio::time::advance(Duration::from_millis(*ms)).await;
                        settle().await;
                    }
                }
                prop_assert!(session.view().is_consistent(), "after {:?}", op);
            }
            Ok(())
        })?;
    }

    /// Opening an open envelope changes nothing, however often it happens
    #[test]
    fn open_is_idempotent(extra_opens in 1..20usize, reveal_first in any::<bool>()) {
        let mut envelope = Envelope::new();
        let reveal = envelope.open().unwrap();
        if reveal_first {
            envelope.apply(reveal);
        }
        let snapshot = envelope.clone();

        for _ in 0..extra_opens {
            prop_assert!(envelope.open().is_none());
        }
        prop_assert_eq!(envelope, snapshot);
    }

    /// A transition issued before the latest open/close never applies
    #[test]
    fn only_latest_transition_applies(closes in 1..10usize) {
        let mut envelope = Envelope::new();
        let mut issued = vec![envelope.open().unwrap()];
        for _ in 0..closes {
            issued.push(envelope.close().unwrap());
        }

        let latest = issued.pop().unwrap();
        for stale in issued {
            prop_assert!(!envelope.apply(stale));
        }
        prop_assert!(envelope.apply(latest));
        prop_assert!(!envelope.is_open());
        prop_assert!(!envelope.show_letter_content());
    }

    /// Music ends up playing iff it was toggled an odd number of times
    #[test]
    fn music_toggle_parity(toggles in 0..30usize) {
        let mut media = lovenote_core::MediaController::new();
        for _ in 0..toggles {
            media.toggle();
        }
        prop_assert_eq!(media.is_playing(), toggles % 2 == 1);
    }

    /// Every layout has exactly twenty flakes inside their ranges
    #[test]
    fn snowfall_always_in_bounds(seed in any::<u64>()) {
        let snowfall = Snowfall::generate_with(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(snowfall.len(), SNOWFLAKE_COUNT);
        for flake in snowfall.iter() {
            prop_assert!((0.0..100.0).contains(&flake.left));
            prop_assert!((5.0..10.0).contains(&flake.duration));
            prop_assert!((0.0..5.0).contains(&flake.delay));
            prop_assert!((10.0..30.0).contains(&flake.font_size));
        }
    }
}
