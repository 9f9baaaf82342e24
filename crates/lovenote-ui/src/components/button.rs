//! Button Components
//!
//! - Glass: frosted round button floating over the page (music toggle)
//! - Ghost: bare icon on paper (letter close button)

use dioxus::prelude::*;

use crate::{Icon, IconKind};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Frosted translucent circle with a soft shadow
    #[default]
    Glass,
    /// No background, color change on hover
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Glass => "btn-glass",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Icon button for compact actions (music, close)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler; receives the event so callers can stop propagation
    pub onclick: EventHandler<MouseEvent>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub variant: ButtonVariant,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconButton {
///         variant: ButtonVariant::Glass,
///         aria_label: "Play music".to_string(),
///         onclick: move |_| session.toggle_music(),
///         Icon { kind: IconKind::Music }
///     }
/// }
/// ```
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}

/// Close button with X icon.
///
/// Stops the click from reaching anything underneath before calling
/// `onclick`.
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                onclick.call(());
            },
            aria_label: "Close".to_string(),
            variant: ButtonVariant::Ghost,
            class: "close-btn".to_string(),
            Icon { kind: IconKind::Close, size: 24 }
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon-btn {} {}", variant.class(), extra),
        _ => format!("icon-btn {}", variant.class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Glass.class(), "btn-glass");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Glass);
    }

    #[test]
    fn extra_classes_appended() {
        assert_eq!(button_class(ButtonVariant::Ghost, None), "icon-btn btn-ghost");
        assert_eq!(button_class(ButtonVariant::Ghost, Some("")), "icon-btn btn-ghost");
        assert_eq!(
            button_class(ButtonVariant::Glass, Some("music-toggle")),
            "icon-btn btn-glass music-toggle"
        );
    }
}
