//! Mobile Menu Component
//!
//! Right-hand sheet with the nav links and a labelled theme toggle. Picking a
//! link closes the sheet; so does the backdrop and the close button.

use cryptoworld_core::content::NAV_LINKS;
use cryptoworld_ui::{Button, ButtonVariant, Icon, IconButton, LucideIcon};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Whether the sheet is showing
    pub open: bool,
    /// Current theme, for the toggle label
    pub is_dark: bool,
    /// Called when the sheet should close
    pub on_close: EventHandler<()>,
    /// Called when the theme toggle is pressed
    pub on_toggle_theme: EventHandler<()>,
}

/// Label of the theme toggle inside the sheet
pub fn theme_toggle_label(is_dark: bool) -> &'static str {
    if is_dark {
        "Light Mode"
    } else {
        "Dark Mode"
    }
}

#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_toggle_theme = props.on_toggle_theme;
    let toggle_icon = if props.is_dark { Icon::Sun } else { Icon::Moon };
    let toggle_label = theme_toggle_label(props.is_dark);

    rsx! {
        div {
            class: "sheet-backdrop",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "sheet sheet-right",
            role: "dialog",
            "aria-label": "Navigation Menu",

            div { class: "sheet-header",
                IconButton {
                    aria_label: "Close menu".to_string(),
                    onclick: move |_| on_close.call(()),
                    LucideIcon { icon: Icon::Close }
                }
            }

            div { class: "sheet-links",
                for (index, link) in NAV_LINKS.iter().enumerate() {
                    a {
                        key: "{link.name}",
                        class: "sheet-link",
                        href: "{link.anchor}",
                        style: format!("animation-delay: {:.1}s", index as f32 * 0.1),
                        onclick: move |_| on_close.call(()),
                        "{link.name}"
                    }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    class: "sheet-theme-toggle".to_string(),
                    onclick: move |_| on_toggle_theme.call(()),
                    LucideIcon { icon: toggle_icon }
                    "{toggle_label}"
                }
            }
        }
    }
}
