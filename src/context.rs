//! Theme context for Crypto World.
//!
//! The theme is the only state shared between sections. It is created once
//! in `App` and read through `use_theme` everywhere else.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut theme = use_theme();
//! let is_dark = theme.read().is_dark();
//! theme.write().toggle();
//! ```

use std::path::PathBuf;

use cryptoworld_core::{Preferences, ThemeState};
use dioxus::prelude::*;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the preference store, or `None` if it is unavailable.
///
/// An unavailable store is not an error for the UI: the theme still toggles,
/// it just is not remembered across launches.
pub fn open_preferences() -> Option<Preferences> {
    let data_dir = get_data_dir();
    match Preferences::open_in(&data_dir) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            tracing::warn!("Theme preference unavailable in {:?}: {}", data_dir, e);
            None
        }
    }
}

/// Create the theme state from the saved preference and provide it
pub fn use_theme_provider() -> Signal<ThemeState> {
    use_context_provider(|| Signal::new(ThemeState::load(open_preferences())))
}

/// Hook to access the theme from context.
pub fn use_theme() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}
