//! Educational Section
//!
//! Topic cards that expand on click, and the glossary with live search.

use cryptoworld_core::content::{toggle_expanded, TopicCard, TOPIC_CARDS};
use cryptoworld_core::GlossarySearch;
use cryptoworld_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Icon, LucideIcon, SearchInput,
};
use dioxus::prelude::*;

#[component]
pub fn Educational() -> Element {
    let mut expanded: Signal<Option<usize>> = use_signal(|| None);
    let mut query = use_signal(String::new);

    let search = use_memo(move || GlossarySearch::run(query()));
    let matches = search.read().matches().to_vec();
    let empty_message = search.read().is_empty().then(|| search.read().empty_message());

    rsx! {
        section { id: "learn", class: "section section-fade-up",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "Learn About Crypto" }
                    p { class: "section-subtitle",
                        "Master the fundamentals of cryptocurrency and blockchain technology"
                    }
                }

                div { class: "grid grid-3 topics",
                    for (index, card) in TOPIC_CARDS.iter().enumerate() {
                        TopicTile {
                            key: "{card.title}",
                            card: *card,
                            expanded: expanded() == Some(index),
                            on_click: move |_| expanded.set(toggle_expanded(expanded(), index)),
                        }
                    }
                }

                Card { class: "card-accent glossary".to_string(),
                    CardHeader {
                        CardTitle { class: "centered large".to_string(), "Crypto Glossary" }
                        div { class: "glossary-search",
                            SearchInput {
                                value: query(),
                                oninput: move |text| query.set(text),
                                placeholder: "Search crypto terms...".to_string(),
                            }
                        }
                    }
                    CardContent {
                        div { class: "grid grid-2",
                            for (index, entry) in matches.iter().enumerate() {
                                div {
                                    key: "{entry.term}",
                                    class: "tile glossary-entry",
                                    style: format!("animation-delay: {:.2}s", index as f32 * 0.05),
                                    div { class: "row gap",
                                        Badge { variant: BadgeVariant::Success, "{entry.term}" }
                                    }
                                    p { class: "muted small", "{entry.definition}" }
                                }
                            }
                        }
                        if let Some(message) = empty_message {
                            div { class: "empty-state", "{message}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicTile(card: TopicCard, expanded: bool, on_click: EventHandler<()>) -> Element {
    let (from, to) = card.gradient;
    let (class, more_class) = if expanded {
        ("hover-lift clickable expanded", "topic-more open")
    } else {
        ("hover-lift clickable", "topic-more")
    };

    rsx! {
        Card {
            class: class.to_string(),
            onclick: move |_| on_click.call(()),
            CardHeader {
                div { class: "row gap",
                    div {
                        class: "topic-icon",
                        style: "background: linear-gradient(to right, {from}, {to});",
                        LucideIcon { icon: Icon::from(card.icon), size: 24 }
                    }
                    CardTitle { "{card.title}" }
                }
            }
            CardContent {
                p { class: "muted", "{card.description}" }
                div { class: more_class,
                    p { class: "small accent",
                        "Click to explore more detailed guides and tutorials about this topic."
                    }
                }
            }
        }
    }
}
