//! Hero Section
//!
//! Full-height banner with a drifting particle background. The particle
//! layout tracks the section's size through `onresize`.

use cryptoworld_core::content::HERO_STATS;
use cryptoworld_core::{scatter, Viewport, PARTICLE_COUNT};
use cryptoworld_ui::{Button, ButtonSize, Icon, LucideIcon};
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let mut viewport = use_signal(Viewport::default);

    let particles = use_memo(move || scatter(viewport(), PARTICLE_COUNT, &mut rand::rng()));

    let on_resize = move |e: Event<ResizeData>| {
        if let Ok(size) = e.get_content_box_size() {
            let next = Viewport::new(size.width, size.height);
            if next != viewport() {
                tracing::trace!(width = size.width, height = size.height, "hero resized");
                viewport.set(next);
            }
        }
    };

    rsx! {
        section { id: "home", class: "hero", onresize: on_resize,
            div { class: "hero-bg",
                div { class: "hero-glow" }
                div { class: "particles",
                    for (i, particle) in particles.read().iter().enumerate() {
                        div { key: "{i}", class: "particle", style: particle.style() }
                    }
                }
            }

            div { class: "container hero-content",
                span { class: "hero-pill fade-up",
                    LucideIcon { icon: Icon::TrendingUp }
                    "Market is up 12% today"
                }

                h1 { class: "hero-title fade-up delay-1", "Explore the Future of Finance" }

                p { class: "hero-copy fade-up delay-2",
                    "Join millions of users in the world of cryptocurrency. Trade, invest, and explore "
                    "the decentralized future with our secure and user-friendly platform."
                }

                div { class: "hero-actions fade-up delay-3",
                    Button { size: ButtonSize::Lg, class: "cta".to_string(),
                        "Get Started"
                        span { class: "cta-arrow",
                            LucideIcon { icon: Icon::ArrowRight, size: 20 }
                        }
                    }
                    a { class: "btn-outline btn-lg", href: "#markets", "View Markets" }
                }

                div { class: "hero-stats fade-up delay-4",
                    for stat in HERO_STATS.iter() {
                        div { key: "{stat.label}", class: "hero-stat",
                            div { class: "hero-stat-value", "{stat.value}" }
                            div { class: "muted", "{stat.label}" }
                        }
                    }
                }
            }

            div { class: "scroll-indicator",
                div { class: "scroll-dot" }
            }
        }
    }
}
