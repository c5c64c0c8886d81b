//! Market Overview Section
//!
//! Six price cards and the "Trending Now" strip. All figures are sample
//! data from `cryptoworld_core::content`.

use cryptoworld_core::content::{Ticker, TICKERS, TRENDING};
use cryptoworld_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Icon, LucideIcon,
};
use dioxus::prelude::*;

#[component]
pub fn MarketOverview() -> Element {
    rsx! {
        section { id: "markets", class: "section section-fade-down",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-title", "Live Market Data" }
                    p { class: "section-subtitle",
                        "Stay updated with real-time cryptocurrency prices and market movements"
                    }
                }

                div { class: "grid grid-3",
                    for ticker in TICKERS.iter() {
                        TickerCard { key: "{ticker.id}", ticker: *ticker }
                    }
                }

                Card { class: "card-accent".to_string(),
                    CardHeader {
                        CardTitle { class: "accent-title".to_string(),
                            LucideIcon { icon: Icon::TrendingUp, size: 20 }
                            "Trending Now"
                        }
                    }
                    CardContent {
                        div { class: "grid grid-4",
                            for coin in TRENDING.iter() {
                                div { key: "{coin.symbol}", class: "tile clickable",
                                    div {
                                        p { class: "strong", "{coin.symbol}" }
                                        p { class: "muted small", "{coin.price}" }
                                    }
                                    Badge { variant: BadgeVariant::Success, "{coin.change}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TickerCard(ticker: Ticker) -> Element {
    let trend = ticker.trend();
    let price = ticker.formatted_price();
    let change = ticker.change_label();
    let (badge, trend_icon) = if trend.is_up() {
        (BadgeVariant::Success, Icon::TrendingUp)
    } else {
        (BadgeVariant::Destructive, Icon::TrendingDown)
    };

    rsx! {
        Card { class: "hover-lift".to_string(),
            CardHeader {
                div { class: "row between",
                    div { class: "row gap",
                        div { class: "coin-glyph", "{ticker.glyph}" }
                        div {
                            CardTitle { "{ticker.symbol}" }
                            p { class: "muted small", "{ticker.name}" }
                        }
                    }
                    span { class: "star",
                        LucideIcon { icon: Icon::Star, size: 20 }
                    }
                }
            }
            CardContent {
                div { class: "row between",
                    span { class: "price", "{price}" }
                    Badge { variant: badge,
                        LucideIcon { icon: trend_icon, size: 12 }
                        "{change}"
                    }
                }
                div { class: "grid grid-2 small stats",
                    div {
                        p { class: "muted", "Market Cap" }
                        p { class: "strong", "${ticker.market_cap}" }
                    }
                    div {
                        p { class: "muted", "Volume" }
                        p { class: "strong", "${ticker.volume}" }
                    }
                }
            }
        }
    }
}
