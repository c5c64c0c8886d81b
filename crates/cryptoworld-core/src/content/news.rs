use serde::Serialize;

/// A card in the news feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub source: &'static str,
    /// Age of the article at publication of the page, in hours
    pub hours_ago: u32,
    pub category: &'static str,
    /// Decorative only; never fetched by the core
    pub image_url: &'static str,
}

/// An entry in the "Featured Articles" list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    /// (year, month, day)
    pub published_on: (i32, u32, u32),
    pub read_minutes: u32,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub static NEWS_ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        id: 1,
        title: "Bitcoin Reaches New All-Time High Amid Institutional Adoption",
        excerpt: "Major corporations continue to add Bitcoin to their treasury reserves as regulatory clarity improves worldwide.",
        source: "Crypto Daily",
        hours_ago: 2,
        category: "Bitcoin",
        image_url: "https://images.unsplash.com/photo-1518546305927-5a555bb7020d?w=400&h=200&fit=crop",
    },
    NewsArticle {
        id: 2,
        title: "Ethereum 2.0 Staking Rewards Hit Record Levels",
        excerpt: "Validators are seeing increased yields as network activity surges and more ETH is locked in staking contracts.",
        source: "DeFi Pulse",
        hours_ago: 4,
        category: "Ethereum",
        image_url: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=400&h=200&fit=crop",
    },
    NewsArticle {
        id: 3,
        title: "Central Bank Digital Currencies Gain Momentum in Asia",
        excerpt: "Several Asian countries announce pilot programs for their national digital currencies, marking a shift in monetary policy.",
        source: "Global Finance",
        hours_ago: 6,
        category: "CBDC",
        image_url: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=400&h=200&fit=crop",
    },
    NewsArticle {
        id: 4,
        title: "DeFi TVL Surpasses $100 Billion Milestone",
        excerpt: "Total Value Locked in DeFi protocols reaches historic highs as yield farming and liquidity mining gain popularity.",
        source: "DeFi Llama",
        hours_ago: 8,
        category: "DeFi",
        image_url: "https://images.unsplash.com/photo-1642104704074-907c0698cbd9?w=400&h=200&fit=crop",
    },
];

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Complete Guide to Cryptocurrency Trading for Beginners",
        author: "Sarah Chen",
        published_on: (2024, 12, 15),
        read_minutes: 8,
        tags: &["Trading", "Beginner"],
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "Understanding Smart Contracts: Beyond the Hype",
        author: "Michael Rodriguez",
        published_on: (2024, 12, 12),
        read_minutes: 6,
        tags: &["Technology", "Smart Contracts"],
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Top 10 Security Practices for Crypto Investors",
        author: "Emma Thompson",
        published_on: (2024, 12, 10),
        read_minutes: 12,
        tags: &["Security", "Investment"],
        featured: false,
    },
];
