//! Durable local key-value slots backing the session and profile stores.
//!
//! Each store owns exactly one slot, addressed by a fixed key. Values are
//! serialized JSON documents; an absent key means the store holds no record.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Slot key for the current session identity.
pub static SESSION_KEY: &str = "voyago.session";
/// Slot key for the current travel profile.
pub static PROFILE_KEY: &str = "voyago.profile";

/// A durable string key-value backend.
///
/// Reading a never-written key yields `Ok(None)`, and removing a missing key
/// is a no-op, so store rehydration and idempotent clears need no special
/// casing in the callers.
pub trait Storage: fmt::Debug + Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
    /// Remove the value stored under `key`.
    fn remove(&self, key: &str) -> Result<()>;
}

/// An in-memory backend. Nothing survives the process; useful for tests and
/// for callers that don't want persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// A file-backed backend holding one JSON document per key inside a
/// caller-chosen directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create, if needed) the storage directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(Error::Storage)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value).map_err(Error::Storage)
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(e)),
        }
    }
}
