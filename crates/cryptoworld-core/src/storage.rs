//! Persistent preferences using redb.
//!
//! A single `preferences` table of string keys to string values. Today the
//! only key is `theme`.
//!
//! redb holds an exclusive lock on the file for as long as a `Database` is
//! open. The desktop app and the CLI share the same file, so the database is
//! opened for each read or write and closed again right after.

use crate::error::CoreError;
use crate::theme::Theme;
use parking_lot::Mutex;
use redb::{Database, TableDefinition};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

const THEME_KEY: &str = "theme";

/// File name of the preference database inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Preference store backed by redb
#[derive(Clone)]
pub struct Preferences {
    path: PathBuf,
    /// Serializes opens from clones of this handle; redb refuses a second
    /// open of the same file within one process.
    lock: Arc<Mutex<()>>,
}

impl Preferences {
    /// Open (or create) the preference database at `path`.
    ///
    /// Creates the parent directory and the `preferences` table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let prefs = Self {
            path: path.to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        };

        prefs.with_db(|db| {
            let write_txn = db.begin_write()?;
            {
                let _ = write_txn.open_table(PREFERENCES_TABLE)?;
            }
            write_txn.commit()?;
            Ok(())
        })?;

        tracing::debug!("Opened preferences at {:?}", path);

        Ok(prefs)
    }

    /// Open `preferences.redb` inside a data directory
    pub fn open_in(data_dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` against a freshly opened database; the file lock is released
    /// when it returns.
    fn with_db<T>(
        &self,
        f: impl FnOnce(&Database) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let _guard = self.lock.lock();
        let db = Database::create(&self.path)?;
        f(&db)
    }

    /// Read a raw preference value
    pub fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.with_db(|db| {
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(PREFERENCES_TABLE)?;
            Ok(table.get(key)?.map(|v| v.value().to_string()))
        })
    }

    /// Write a raw preference value, overwriting any previous one
    pub fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.with_db(|db| {
            let write_txn = db.begin_write()?;
            {
                let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
                table.insert(key, value)?;
            }
            write_txn.commit()?;
            Ok(())
        })
    }

    /// Stored theme, if any. An empty value counts as no preference.
    pub fn theme(&self) -> Result<Option<Theme>, CoreError> {
        Ok(self
            .get(THEME_KEY)?
            .filter(|v| !v.is_empty())
            .map(|v| Theme::from_stored(&v)))
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), CoreError> {
        self.set(THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_theme_is_none() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();
        assert_eq!(prefs.theme().unwrap(), None);
    }

    #[test]
    fn test_theme_roundtrip() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();

        prefs.set_theme(Theme::Light).unwrap();
        assert_eq!(prefs.theme().unwrap(), Some(Theme::Light));
        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("light"));

        prefs.set_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.theme().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let prefs = Preferences::open_in(&nested).unwrap();
        prefs.set_theme(Theme::Light).unwrap();
        assert!(nested.join(PREFERENCES_FILE).exists());
    }

    #[test]
    fn test_unrecognized_value_reads_as_light() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();
        prefs.set("theme", "solarized").unwrap();
        assert_eq!(prefs.theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn test_empty_value_is_no_preference() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();
        prefs.set("theme", "").unwrap();
        assert_eq!(prefs.theme().unwrap(), None);
    }

    #[test]
    fn test_file_is_not_held_between_operations() {
        let dir = tempdir().unwrap();
        let desktop = Preferences::open_in(dir.path()).unwrap();
        let cli = Preferences::open_in(dir.path()).unwrap();

        cli.set_theme(Theme::Light).unwrap();
        assert_eq!(desktop.theme().unwrap(), Some(Theme::Light));

        desktop.set_theme(Theme::Dark).unwrap();
        assert_eq!(cli.theme().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_clones_share_the_file() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();
        let clone = prefs.clone();

        clone.set_theme(Theme::Light).unwrap();
        assert_eq!(prefs.theme().unwrap(), Some(Theme::Light));
        assert_eq!(clone.path(), dir.path().join(PREFERENCES_FILE));
    }
}
