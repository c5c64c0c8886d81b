use dioxus::prelude::*;

use cryptoworld_ui::{use_toasts_provider, Toaster};

use crate::context::use_theme_provider;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page; sections are reached by in-page anchors
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, theme and toast context, and routing.
#[component]
pub fn App() -> Element {
    let theme = use_theme_provider();
    use_toasts_provider();

    // Mirror the theme onto the document root so `html.dark` selectors apply
    use_effect(move || {
        let class = theme.read().root_class();
        let _ = document::eval(&format!(
            "document.documentElement.classList.toggle('dark', {0}); \
             document.documentElement.classList.toggle('light', {1});",
            class == "dark",
            class == "light",
        ));
    });

    let root_class = theme.read().root_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app {root_class}",
            Router::<Route> {}
            Toaster { theme: root_class.to_string() }
        }
    }
}
