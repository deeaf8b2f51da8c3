//! JSON file store.
//!
//! The file holds a flat JSON object of string values. Every mutation is
//! written straight back by replacing the file through a sibling temp file,
//! so a crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{XpError, XpResult};

/// A store persisted as a JSON object in a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file opens as an empty store;
    /// nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> XpResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| XpError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "store file not found, starting empty");
                BTreeMap::new()
            }
            Err(source) => return Err(XpError::Io { path, source }),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> XpResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|source| XpError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;
        tracing::trace!(path = %self.path.display(), keys = self.entries.len(), "store persisted");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> XpError {
        XpError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> XpResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> XpResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> XpResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> XpResult<()> {
        let previous = self.entries.clone();
        for &(key, value) in entries {
            self.entries.insert(key.to_string(), value.to_string());
        }
        if let Err(e) = self.persist() {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }
}
