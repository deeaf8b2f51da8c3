//! Key-value stores backing the tracker.
//!
//! A store maps string keys to string values and survives for as long as
//! its backend does: [`MemoryStore`] for the lifetime of the process,
//! [`FileStore`] across runs.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::XpResult;

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> XpResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> XpResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> XpResult<()>;

    /// Store several entries so that either all of them land or none do.
    ///
    /// The default writes them one by one and, if a write fails, restores
    /// the entries already written before returning the error.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> XpResult<()> {
        let mut previous: Vec<(&str, Option<String>)> = Vec::with_capacity(entries.len());
        for &(key, value) in entries {
            let before = self.get(key)?;
            if let Err(e) = self.set(key, value) {
                for (key, before) in previous.into_iter().rev() {
                    let restored = match before {
                        Some(value) => self.set(key, &value),
                        None => self.remove(key),
                    };
                    if let Err(rollback) = restored {
                        tracing::warn!(
                            key,
                            error = %rollback,
                            "cannot restore entry after failed write"
                        );
                    }
                }
                return Err(e);
            }
            previous.push((key, before));
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> XpResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> XpResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> XpResult<()> {
        (**self).remove(key)
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> XpResult<()> {
        (**self).set_many(entries)
    }
}
