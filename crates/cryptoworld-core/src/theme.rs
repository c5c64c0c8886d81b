//! Light/dark theme preference.
//!
//! The theme is read once at startup and written back on every change.
//! Storage failures never reach the user: they are logged and the in-memory
//! value keeps working.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::storage::Preferences;

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Interpret a stored value. Only the exact string `"dark"` is dark.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for user input (CLI), unlike [`Theme::from_stored`]
impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(CoreError::InvalidTheme(s.to_string())),
        }
    }
}

/// The live theme plus the store it is mirrored to.
///
/// `store` is `None` when the preference database could not be opened;
/// toggling still works, it just is not remembered.
#[derive(Clone)]
pub struct ThemeState {
    theme: Theme,
    store: Option<Preferences>,
}

impl ThemeState {
    /// Read the saved preference, falling back to [`Theme::Dark`]
    pub fn load(store: Option<Preferences>) -> Self {
        let theme = match store.as_ref().map(Preferences::theme) {
            Some(Ok(Some(saved))) => saved,
            Some(Ok(None)) | None => Theme::default(),
            Some(Err(e)) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };
        tracing::debug!(%theme, persisted = store.is_some(), "theme loaded");
        Self { theme, store }
    }

    /// In-memory only, nothing is read or written
    pub fn ephemeral(theme: Theme) -> Self {
        Self { theme, store: None }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Class applied to the root container
    pub fn root_class(&self) -> &'static str {
        self.theme.as_str()
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Set the theme and persist it
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Some(store) = &self.store {
            if let Err(e) = store.set_theme(theme) {
                tracing::warn!("Failed to save theme preference: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(ThemeState::load(None).theme(), Theme::Dark);
    }

    #[test]
    fn test_toggled_is_an_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("DARK"), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!(
            "purple".parse::<Theme>(),
            Err(CoreError::InvalidTheme(_))
        ));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }

    #[test]
    fn test_ephemeral_toggle() {
        let mut state = ThemeState::ephemeral(Theme::Dark);
        assert!(!state.is_persistent());
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.root_class(), "light");
    }

    #[test]
    fn test_toggle_writes_through() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();
        let mut state = ThemeState::load(Some(prefs.clone()));

        let after = state.toggle();
        assert_eq!(prefs.theme().unwrap(), Some(after));
        assert!(!state.is_dark());
    }
}
