//! UI Components for Lovenote.

mod envelope;
mod letter_modal;
mod music_control;

pub use envelope::Envelope;
pub use letter_modal::LetterModal;
pub use music_control::MusicControl;
