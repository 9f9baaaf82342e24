//! Lovenote Core Library
//!
//! State and behavior behind the animated greeting card, independent of any
//! rendering surface.
//!
//! ## Overview
//!
//! The card is an envelope that opens on click, reveals a letter with a photo
//! and a message, plays looping background music and shows falling snow. All
//! of that is driven by three flags ([`ViewState`]) plus two delayed
//! transitions. This crate owns those flags and the rules for changing them.
//!
//! - [`Envelope`]: open/close state machine with generation-checked delays
//! - [`MediaController`]: optimistic play/pause tracking
//! - [`Snowfall`]: one-shot random decoration layout
//! - [`CardSession`]: ties the above to an [`AudioSink`] and the tokio timer
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use lovenote_core::CardSession;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Any AudioSink: the webview bridge, or a test double
//!     let session = CardSession::new(Arc::new(my_sink));
//!     session.open_envelope();
//!     assert!(session.view().is_open);
//!
//!     tokio::time::sleep(lovenote_core::REVEAL_DELAY).await;
//!     assert!(session.view().show_letter_content);
//! }
//! ```

pub mod assets;
pub mod envelope;
pub mod error;
pub mod letter;
pub mod media;
pub mod session;
pub mod snow;
pub mod view;

// Re-exports
pub use assets::{load_data_uri, AssetKind};
pub use envelope::{DelayedTransition, Envelope, TransitionKind, COLLAPSE_DELAY, REVEAL_DELAY};
pub use error::{CardError, PlaybackError};
pub use letter::{CardConfig, Letter};
pub use media::{AudioSink, MediaCommand, MediaController, PlayFuture};
pub use session::CardSession;
pub use snow::{Snowfall, SnowflakeDescriptor, SNOWFLAKE_COUNT};
pub use view::{CardPhase, CardSnapshot, ViewState};
