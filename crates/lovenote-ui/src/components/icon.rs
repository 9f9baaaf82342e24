//! Inline SVG line icons (24x24 grid, stroke drawn).

use dioxus::prelude::*;

/// The icons the card uses
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Heart,
    Music,
    Pause,
    Close,
    Snowflake,
}

impl IconKind {
    /// SVG path data, one entry per stroke
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            IconKind::Music => &[
                "M9 18V5l12-2v13",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
                "M15 16a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
            IconKind::Pause => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::Snowflake => &[
                "M2 12h20",
                "M12 2v20",
                "m20 16-4-4 4-4",
                "m4 8 4 4-4 4",
                "m16 4-4 4-4-4",
                "m8 20 4-4 4 4",
            ],
        }
    }

    /// Filled icons use the stroke color as fill too
    pub fn filled(&self) -> bool {
        matches!(self, IconKind::Heart)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Width and height in pixels
    #[props(default = 20)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let fill = if props.kind.filled() { "currentColor" } else { "none" };
    let class = props.class.unwrap_or_default();

    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            for d in props.kind.paths() {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        for kind in [
            IconKind::Heart,
            IconKind::Music,
            IconKind::Pause,
            IconKind::Close,
            IconKind::Snowflake,
        ] {
            assert!(!kind.paths().is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn only_heart_is_filled() {
        assert!(IconKind::Heart.filled());
        assert!(!IconKind::Music.filled());
        assert!(!IconKind::Close.filled());
    }
}
