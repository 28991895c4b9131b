//! Local key-value persistence for preferences.
//!
//! Each key lives in its own file under the storage root:
//!
//! ```text
//! <root>/
//!   language     # "fr" | "en"
//!   currency     # "USD" | "DJF"
//!   user         # JSON user record, absent when signed out
//! ```
//!
//! Values are read once at startup and written on every change. There is
//! no versioning of the stored shape.

use std::{fs, io, path::PathBuf};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// The persisted preference entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Language,
    Currency,
    User,
}

impl Key {
    fn file_name(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Currency => "currency",
            Self::User => "user",
        }
    }
}

/// Local file-based key-value storage.
#[derive(Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Reads a value. A missing entry is `None`.
    pub fn get(&self, key: Key) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value.trim_end().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a value, replacing any previous one.
    pub fn set(&self, key: Key, value: &str) -> Result<()> {
        fs::write(self.path(key), value)?;
        Ok(())
    }

    /// Removes an entry.
    ///
    /// Idempotent: does nothing if the entry doesn't exist.
    pub fn remove(&self, key: Key) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads a JSON-encoded value.
    pub fn get_json<T: serde::de::DeserializeOwned>(&self, key: Key) -> Result<Option<T>> {
        self.get(key)?
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Into::into)
    }

    /// Writes a value as JSON.
    pub fn set_json<T: serde::Serialize>(&self, key: Key, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }

    fn path(&self, key: Key) -> PathBuf {
        self.root.join(key.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("prefs")).unwrap();
        (dir, storage)
    }

    #[test]
    fn missing_key_is_none() {
        let (_dir, storage) = test_storage();
        assert_eq!(storage.get(Key::Language).unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let (_dir, storage) = test_storage();
        storage.set(Key::Currency, "DJF").unwrap();
        assert_eq!(storage.get(Key::Currency).unwrap().as_deref(), Some("DJF"));
    }

    #[test]
    fn set_overwrites() {
        let (_dir, storage) = test_storage();
        storage.set(Key::Language, "fr").unwrap();
        storage.set(Key::Language, "en").unwrap();
        assert_eq!(storage.get(Key::Language).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn keys_are_independent() {
        let (dir, storage) = test_storage();
        storage.set(Key::Language, "en").unwrap();
        storage.set(Key::Currency, "USD").unwrap();
        storage.remove(Key::Language).unwrap();

        assert_eq!(storage.get(Key::Language).unwrap(), None);
        assert_eq!(storage.get(Key::Currency).unwrap().as_deref(), Some("USD"));
        assert!(dir.path().join("prefs").join("currency").is_file());
    }

    #[test]
    fn remove_is_idempotent() {
        let (_dir, storage) = test_storage();
        storage.remove(Key::User).unwrap();
        storage.remove(Key::User).unwrap();
    }

    #[test]
    fn json_round_trip() {
        let (_dir, storage) = test_storage();
        let sample = Sample {
            name: "Abdelnassir".into(),
        };
        storage.set_json(Key::User, &sample).unwrap();
        assert_eq!(storage.get_json::<Sample>(Key::User).unwrap(), Some(sample));
    }

    #[test]
    fn corrupt_json_is_an_error() {
        let (_dir, storage) = test_storage();
        storage.set(Key::User, "{not json").unwrap();
        let err = storage.get_json::<Sample>(Key::User).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
