//! Reusable card components

mod button;
mod icon;
mod snowfall;

pub use button::*;
pub use icon::*;
pub use snowfall::*;
