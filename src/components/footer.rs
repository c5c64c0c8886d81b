//! Footer Component
//!
//! Newsletter sign-up, brand blurb with social links, four link columns and
//! the bottom bar. The sign-up goes nowhere: it waits out the simulated
//! request, shows a toast and clears the field.

use cryptoworld_core::content::{BRAND_TAGLINE, COPYRIGHT, FOOTER_COLUMNS, SOCIAL_LINKS};
use cryptoworld_core::Newsletter;
use cryptoworld_ui::{use_toasts, Button, Card, Icon, Input, LucideIcon};
use dioxus::prelude::*;

use crate::components::Brand;

/// A submit starts a sign-up only when none is in flight and the field has
/// something in it. The in-flight flag is raised before the request is
/// spawned, so a second click lands here and is dropped.
fn can_submit(in_flight: bool, email: &str) -> bool {
    !in_flight && !email.trim().is_empty()
}

#[component]
pub fn Footer() -> Element {
    let mut email = use_signal(String::new);
    let mut subscribing = use_signal(|| false);
    let mut toasts = use_toasts();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let address = email();
        if !can_submit(subscribing(), &address) {
            return;
        }

        subscribing.set(true);
        spawn(async move {
            match Newsletter::new().subscribe(&address).await {
                Ok(receipt) => {
                    toasts.success(receipt.message());
                    email.set(String::new());
                }
                Err(e) => tracing::debug!("Newsletter sign-up skipped: {}", e),
            }
            subscribing.set(false);
        });
    };

    rsx! {
        footer { id: "about", class: "site-footer",
            div { class: "container",
                Card { class: "card-accent newsletter".to_string(),
                    h3 { class: "section-title small-title", "Stay Updated with Crypto World" }
                    p { class: "muted newsletter-copy",
                        "Get the latest news, market insights, and exclusive content delivered to your inbox."
                    }
                    form { class: "newsletter-form", onsubmit: on_submit,
                        Input {
                            value: email(),
                            oninput: move |text| email.set(text),
                            input_type: "email".to_string(),
                            placeholder: "Enter your email address".to_string(),
                            required: true,
                            class: "grow".to_string(),
                        }
                        Button { button_type: "submit".to_string(), disabled: subscribing(),
                            if subscribing() {
                                "Subscribing..."
                            } else {
                                "Subscribe"
                                LucideIcon { icon: Icon::ArrowRight }
                            }
                        }
                    }
                }

                div { class: "footer-grid",
                    div { class: "footer-brand",
                        Brand {}
                        p { class: "muted", "{BRAND_TAGLINE}" }
                        div { class: "row gap",
                            for social in SOCIAL_LINKS.iter() {
                                a {
                                    key: "{social.name}",
                                    class: "social-link",
                                    href: "#",
                                    "aria-label": "{social.name}",
                                    LucideIcon { icon: Icon::from(social.icon), size: 20 }
                                }
                            }
                        }
                    }

                    for column in FOOTER_COLUMNS.iter() {
                        div { key: "{column.category}", class: "footer-column",
                            h4 { class: "accent", "{column.category}" }
                            ul {
                                for link in column.links.iter() {
                                    li { key: "{link}",
                                        a { class: "footer-link", href: "#",
                                            "{link}"
                                            LucideIcon { icon: Icon::ExternalLink, size: 12, class: "reveal".to_string() }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    div { class: "muted small", "{COPYRIGHT}" }
                    div { class: "row gap small",
                        span { class: "muted", "Built with \u{2764}\u{FE0F} for the crypto community" }
                        div { class: "row live",
                            span { class: "pulse-dot" }
                            span { class: "tiny", "Live Markets" }
                        }
                    }
                }
            }
        }
    }
}
