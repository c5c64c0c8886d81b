//! Crypto World Core Library
//!
//! Everything the Crypto World landing page knows, independent of how it is
//! drawn: the static content tables, glossary search, price formatting, the
//! persisted light/dark preference and the newsletter sign-up stub.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cryptoworld_core::{GlossarySearch, Preferences, ThemeState};
//!
//! let search = GlossarySearch::run("defi");
//! for entry in search.matches() {
//!     println!("{}: {}", entry.term, entry.definition);
//! }
//!
//! let prefs = Preferences::open_in("~/.local/share/cryptoworld")?;
//! let mut theme = ThemeState::load(Some(prefs));
//! theme.toggle();
//! ```

pub mod content;
pub mod error;
pub mod glossary;
pub mod market;
pub mod news;
pub mod newsletter;
pub mod particles;
pub mod storage;
pub mod theme;

// Re-exports
pub use error::{CoreError, CoreResult};
pub use glossary::{filter_terms, GlossarySearch};
pub use market::{format_change, format_price, Trend};
pub use news::CategoryTone;
pub use newsletter::{EmailAddress, Newsletter, NewsletterError, Subscription, SUBSCRIBE_DELAY};
pub use particles::{scatter, Particle, Viewport, PARTICLE_COUNT};
pub use storage::{Preferences, PREFERENCES_FILE};
pub use theme::{Theme, ThemeState};
