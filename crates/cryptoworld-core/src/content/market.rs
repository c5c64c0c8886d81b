use serde::Serialize;

/// A price card in the market overview.
///
/// `market_cap` and `volume` are pre-abbreviated display strings
/// (`"1.32T"`, `"892M"`); the `$` is added at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ticker {
    pub id: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: &'static str,
    pub volume: &'static str,
    pub glyph: &'static str,
}

/// A row in the "Trending Now" strip. All fields are display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingTicker {
    pub symbol: &'static str,
    pub change: &'static str,
    pub price: &'static str,
}

pub static TICKERS: &[Ticker] = &[
    Ticker {
        id: 1,
        symbol: "BTC",
        name: "Bitcoin",
        price: 67420.50,
        change_24h: 2.5,
        market_cap: "1.32T",
        volume: "28.5B",
        glyph: "\u{20BF}",
    },
    Ticker {
        id: 2,
        symbol: "ETH",
        name: "Ethereum",
        price: 3845.20,
        change_24h: -1.2,
        market_cap: "462.8B",
        volume: "15.2B",
        glyph: "\u{039E}",
    },
    Ticker {
        id: 3,
        symbol: "BNB",
        name: "BNB",
        price: 635.80,
        change_24h: 4.1,
        market_cap: "97.5B",
        volume: "2.1B",
        glyph: "\u{1F7E1}",
    },
    Ticker {
        id: 4,
        symbol: "SOL",
        name: "Solana",
        price: 185.45,
        change_24h: 6.8,
        market_cap: "86.2B",
        volume: "3.8B",
        glyph: "\u{25CE}",
    },
    Ticker {
        id: 5,
        symbol: "XRP",
        name: "XRP",
        price: 0.6234,
        change_24h: -0.8,
        market_cap: "35.4B",
        volume: "1.9B",
        glyph: "\u{25CF}",
    },
    Ticker {
        id: 6,
        symbol: "ADA",
        name: "Cardano",
        price: 0.4567,
        change_24h: 3.2,
        market_cap: "16.1B",
        volume: "892M",
        glyph: "\u{2660}",
    },
];

pub static TRENDING: &[TrendingTicker] = &[
    TrendingTicker { symbol: "PEPE", change: "+45.2%", price: "$0.000012" },
    TrendingTicker { symbol: "WIF", change: "+23.8%", price: "$2.45" },
    TrendingTicker { symbol: "BONK", change: "+18.5%", price: "$0.000023" },
    TrendingTicker { symbol: "FLOKI", change: "+15.3%", price: "$0.000156" },
];
