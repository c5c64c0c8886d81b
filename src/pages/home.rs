//! Home page - the whole landing page, top to bottom.

use dioxus::prelude::*;

use crate::components::{Educational, Footer, Header, Hero, MarketOverview, News};

/// Landing page component.
///
/// Sections are stacked in a fixed order and share nothing but the theme.
#[component]
pub fn Home() -> Element {
    rsx! {
        Header {}
        main { class: "page",
            Hero {}
            MarketOverview {}
            Educational {}
            News {}
        }
        Footer {}
    }
}
