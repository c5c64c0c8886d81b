//! Navigation Header Component
//!
//! Desktop: brand, anchor links, theme toggle
//! Mobile (< 768px): brand, theme toggle, hamburger opening MobileMenu

use cryptoworld_core::content::{BRAND_NAME, NAV_LINKS};
use cryptoworld_ui::{Button, ButtonSize, ButtonVariant, Icon, LucideIcon};
use dioxus::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::context::use_theme;

/// Fixed header bar
#[component]
pub fn Header() -> Element {
    let mut theme = use_theme();
    let mut menu_open = use_signal(|| false);

    let is_dark = theme.read().is_dark();
    let toggle_icon = if is_dark { Icon::Sun } else { Icon::Moon };

    let toggle_theme = move |_: ()| {
        let now = theme.write().toggle();
        tracing::debug!("Theme switched to {}", now);
    };

    rsx! {
        header { class: "site-header",
            nav { class: "container nav-bar",
                Brand {}

                div { class: "nav-links",
                    for (index, link) in NAV_LINKS.iter().enumerate() {
                        a {
                            key: "{link.name}",
                            class: "nav-link",
                            href: "{link.anchor}",
                            style: format!("animation-delay: {:.1}s", index as f32 * 0.1),
                            "{link.name}"
                        }
                    }
                }

                div { class: "nav-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        class: "theme-toggle".to_string(),
                        aria_label: "Toggle theme".to_string(),
                        onclick: toggle_theme,
                        LucideIcon { icon: toggle_icon }
                    }

                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Sm,
                        class: "menu-trigger".to_string(),
                        aria_label: "Open menu".to_string(),
                        onclick: move |_| menu_open.set(true),
                        LucideIcon { icon: Icon::Menu }
                    }
                }
            }
        }

        MobileMenu {
            open: menu_open(),
            is_dark,
            on_close: move |_| menu_open.set(false),
            on_toggle_theme: move |_| {
                theme.write().toggle();
            },
        }
    }
}

/// "₿ Crypto World" logo, shared with the footer
#[component]
pub fn Brand() -> Element {
    rsx! {
        div { class: "brand",
            div { class: "brand-mark", span { "\u{20BF}" } }
            span { class: "brand-name", "{BRAND_NAME}" }
        }
    }
}
