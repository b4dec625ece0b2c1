// Rust guideline compliant 2026-10-18

//! Key-value storage backends.
//!
//! The store persists preferences to a durable backend and caches the
//! filtered view in a session backend. Both share the [`KeyValueStore`]
//! contract: synchronous string get/set/remove that may fail.

use crate::error::{Error, Result, StorageError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove(&self, key: &str) -> std::result::Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage with an optional byte quota.
///
/// Mirrors browser storage: writes that would push the total size of keys
/// and values past the quota fail with [`StorageError::QuotaExceeded`], and
/// the whole backend can be switched off to simulate disabled storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
    failing: Cell<bool>,
}

impl MemoryStorage {
    /// Creates an unbounded in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store that holds at most `bytes` of keys and values.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Makes every subsequent operation fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn check_available(&self) -> std::result::Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.check_available()?;
        let mut entries = self.entries.borrow_mut();

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let size = others + key.len() + value.len();
            if size > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
        self.check_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one JSON file per key.
///
/// Writes go to a temp file that is then renamed over the target, under an
/// exclusive lock on `.lock` in the same directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that backs `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    fn with_lock<F, T>(&self, f: F) -> std::result::Result<T, StorageError>
    where
        F: FnOnce() -> std::result::Result<T, StorageError>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(".lock"))?;

        lock_file
            .try_lock_exclusive()
            .map_err(|e| StorageError::Lock(e.to_string()))?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        use std::fs::File;
        use std::io::Write;

        let path = self.path_for(key);
        self.with_lock(|| {
            let temp_path = path.with_extension("json.tmp");
            {
                let mut file = File::create(&temp_path)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&temp_path, &path)?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
        let path = self.path_for(key);
        self.with_lock(|| {
            match std::fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Io(e)),
            }
        })
    }
}
