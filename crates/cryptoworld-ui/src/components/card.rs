//! Card Components
//!
//! Glass panels used by every section. `Card` is the surface;
//! `CardHeader`, `CardTitle` and `CardContent` lay out its inside.

use dioxus::prelude::*;

use crate::components::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    /// Optional additional CSS classes (`card-accent`, `clickable`, ...)
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = join_classes(&["card", props.class.as_deref().unwrap_or("")]);

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = join_classes(&["card-title", class.as_deref().unwrap_or("")]);

    rsx! {
        h3 { class: "{class}", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}
