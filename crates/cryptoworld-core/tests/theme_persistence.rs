//! Theme preference persistence tests
//!
//! These simulate an app restart by dropping every handle to the
//! preference database and loading it again from the same directory.

use cryptoworld_core::{Preferences, Theme, ThemeState};
use tempfile::TempDir;

fn reload(dir: &TempDir) -> ThemeState {
    let prefs = Preferences::open_in(dir.path()).expect("open preferences");
    ThemeState::load(Some(prefs))
}

#[test]
fn test_first_launch_defaults_to_dark() {
    let dir = TempDir::new().unwrap();
    let state = reload(&dir);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.root_class(), "dark");
}

#[test]
fn test_toggle_survives_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = reload(&dir);
        assert_eq!(state.toggle(), Theme::Light);
    }

    let state = reload(&dir);
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn test_double_toggle_restores_original() {
    let dir = TempDir::new().unwrap();
    let mut state = reload(&dir);
    let original = state.theme();

    state.toggle();
    state.toggle();
    assert_eq!(state.theme(), original);
    drop(state);

    assert_eq!(reload(&dir).theme(), original);
}

#[test]
fn test_stored_value_tracks_memory_after_each_toggle() {
    let dir = TempDir::new().unwrap();
    let prefs = Preferences::open_in(dir.path()).unwrap();
    let mut state = ThemeState::load(Some(prefs.clone()));

    for _ in 0..5 {
        let current = state.toggle();
        assert_eq!(prefs.theme().unwrap(), Some(current));
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some(current.as_str()));
    }
}

#[test]
fn test_explicit_set_is_persisted() {
    let dir = TempDir::new().unwrap();
    {
        let mut state = reload(&dir);
        state.set(Theme::Light);
        state.set(Theme::Light);
    }
    assert_eq!(reload(&dir).theme(), Theme::Light);
}

#[test]
fn test_without_storage_toggle_is_memory_only() {
    let mut state = ThemeState::load(None);
    assert!(!state.is_persistent());
    assert_eq!(state.toggle(), Theme::Light);
    assert_eq!(state.toggle(), Theme::Dark);
}

#[test]
fn test_empty_stored_value_keeps_dark_default() {
    let dir = TempDir::new().unwrap();
    Preferences::open_in(dir.path())
        .unwrap()
        .set("theme", "")
        .unwrap();

    assert_eq!(reload(&dir).theme(), Theme::Dark);
}

#[test]
fn test_second_handle_sees_toggle_while_first_is_alive() {
    let dir = TempDir::new().unwrap();
    let mut running_app = reload(&dir);

    let mut other = reload(&dir);
    assert_eq!(other.toggle(), Theme::Light);

    // The running app keeps its in-memory value until it toggles itself
    assert_eq!(running_app.theme(), Theme::Dark);
    assert_eq!(running_app.toggle(), Theme::Light);
    assert_eq!(reload(&dir).theme(), Theme::Light);
}
