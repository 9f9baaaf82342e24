//! Visual theme for Lovenote.

mod styles;

pub use styles::GLOBAL_STYLES;
