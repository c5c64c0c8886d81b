//! Landing page sections for Crypto World.

mod educational;
mod footer;
mod header;
mod hero;
mod market_overview;
mod mobile_menu;
mod news;

pub use educational::Educational;
pub use footer::Footer;
pub use header::{Brand, Header};
pub use hero::Hero;
pub use market_overview::MarketOverview;
pub use news::News;
