//! Static page content.
//!
//! Every section of the landing page renders one of these tables. They are
//! `&'static` slices and never change at runtime; prices and headlines are
//! sample data, not a feed.

mod glossary;
mod market;
mod news;
mod site;
mod topics;

pub use glossary::{GlossaryTerm, GLOSSARY_TERMS};
pub use market::{Ticker, TrendingTicker, TICKERS, TRENDING};
pub use news::{BlogPost, NewsArticle, BLOG_POSTS, NEWS_ARTICLES};
pub use site::{
    FooterColumn, HeroStat, NavLink, SocialIcon, SocialLink, BRAND_NAME, BRAND_TAGLINE,
    COPYRIGHT, FOOTER_COLUMNS, HERO_STATS, NAV_LINKS, SOCIAL_LINKS,
};
pub use topics::{toggle_expanded, TopicCard, TopicIcon, TOPIC_CARDS};
