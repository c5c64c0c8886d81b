//! News Section
//!
//! Article cards with category badges, then the "Featured Articles" list.

use cryptoworld_core::content::{BlogPost, NewsArticle, BLOG_POSTS, NEWS_ARTICLES};
use cryptoworld_core::CategoryTone;
use cryptoworld_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Icon, LucideIcon,
};
use dioxus::prelude::*;

#[component]
pub fn News() -> Element {
    rsx! {
        section { id: "news", class: "section section-fade-down",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "Latest News & Updates" }
                    p { class: "section-subtitle",
                        "Stay informed with the latest developments in the cryptocurrency world"
                    }
                }

                div { class: "grid grid-2 news-feed",
                    for article in NEWS_ARTICLES.iter() {
                        ArticleCard { key: "{article.id}", article: *article }
                    }
                }

                Card { class: "card-accent".to_string(),
                    CardHeader {
                        CardTitle { class: "centered large".to_string(), "Featured Articles" }
                    }
                    CardContent {
                        div { class: "stack",
                            for post in BLOG_POSTS.iter() {
                                BlogRow { key: "{post.id}", post: *post }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(article: NewsArticle) -> Element {
    let age = article.age_label();

    rsx! {
        Card { class: "hover-lift clickable article".to_string(),
            div { class: "article-cover",
                LucideIcon { icon: Icon::TrendingUp, size: 48 }
            }
            CardHeader {
                div { class: "row between",
                    Badge { variant: BadgeVariant::Tone(article.tone()), "{article.category}" }
                    span { class: "row tiny muted",
                        LucideIcon { icon: Icon::Clock, size: 12 }
                        "{age}"
                    }
                }
                CardTitle { class: "article-title".to_string(), "{article.title}" }
            }
            CardContent {
                p { class: "muted", "{article.excerpt}" }
                div { class: "row between",
                    span { class: "muted small", "{article.source}" }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Sm, class: "accent".to_string(),
                        "Read More"
                        LucideIcon { icon: Icon::ExternalLink, size: 12 }
                    }
                }
            }
        }
    }
}

#[component]
fn BlogRow(post: BlogPost) -> Element {
    let class = if post.featured {
        "tile clickable blog-row featured"
    } else {
        "tile clickable blog-row"
    };
    let date = post.date_label();
    let read_time = post.read_time_label();

    rsx! {
        div { class: "{class}",
            div { class: "blog-body",
                div { class: "row gap",
                    if post.featured {
                        Badge { variant: BadgeVariant::Featured, "Featured" }
                    }
                    for tag in post.tags.iter() {
                        Badge {
                            key: "{tag}",
                            variant: BadgeVariant::Tone(CategoryTone::for_label(tag)),
                            "{tag}"
                        }
                    }
                }
                h3 { class: "blog-title", "{post.title}" }
                div { class: "row gap small muted",
                    span { class: "row",
                        LucideIcon { icon: Icon::User, size: 12 }
                        "{post.author}"
                    }
                    span { class: "row",
                        LucideIcon { icon: Icon::Calendar, size: 12 }
                        "{date}"
                    }
                    span { class: "row",
                        LucideIcon { icon: Icon::Clock, size: 12 }
                        "{read_time}"
                    }
                }
            }
            Button { variant: ButtonVariant::Ghost, size: ButtonSize::Sm, class: "accent".to_string(),
                "Read Article"
                LucideIcon { icon: Icon::ExternalLink, size: 12 }
            }
        }
    }
}
