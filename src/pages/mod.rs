//! Page components for Lovenote.

mod card;

pub use card::CardPage;
