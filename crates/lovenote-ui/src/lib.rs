//! Lovenote UI Components
//!
//! Presentational Dioxus components for the greeting card. They hold no
//! card state; everything comes in through props and goes out through
//! event handlers.
//!
//! ## Palette
//!
//! - **Wine (#7f1d1d)**: page background, envelope body
//! - **Cream (#f5f5f4)**: letter paper
//! - **Gold (#ca8a04)**: wax seal, title glow

pub mod components;

pub use components::*;
