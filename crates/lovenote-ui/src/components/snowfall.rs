//! Falling Snow Layer
//!
//! Renders a [`Snowfall`] layout as absolutely positioned glyphs animated by
//! the `snowfall` keyframes. The layer ignores pointer events so it never
//! blocks clicks on the envelope.

use dioxus::prelude::*;
use lovenote_core::Snowfall;

/// Glyph drawn for each flake
pub const SNOWFLAKE_GLYPH: &str = "\u{2744}";

/// Snowfall layout for the calling component.
///
/// Sampled on the first render of a mount and returned unchanged on every
/// re-render after that.
pub fn use_snowfall() -> Snowfall {
    use_hook(Snowfall::generate)
}

/// Properties for the SnowLayer component
#[derive(Clone, PartialEq, Props)]
pub struct SnowLayerProps {
    /// Flake layout, generated once by the caller
    pub snowfall: Snowfall,
}

/// # Example
///
/// ```rust,ignore
/// let snowfall = use_snowfall();
///
/// rsx! {
///     SnowLayer { snowfall: snowfall.clone() }
/// }
/// ```
#[component]
pub fn SnowLayer(props: SnowLayerProps) -> Element {
    rsx! {
        div {
            class: "snow-layer",
            "aria-hidden": "true",
            for (i, flake) in props.snowfall.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "snowflake",
                    style: "{flake.style()}",
                    "{SNOWFLAKE_GLYPH}"
                }
            }
        }
    }
}
