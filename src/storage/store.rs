use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AppError;
use crate::state::request_state::{Field, RequestRecord};

/// Result of a mutating store operation.
///
/// The in-memory change has already happened; `saved` reports whether the
/// file on disk caught up with it.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub saved: Result<(), AppError>,
}

impl<T> Persisted<T> {
    fn untouched(value: T) -> Self {
        Self { value, saved: Ok(()) }
    }
}

/// Ordered collection of saved requests backed by a JSON file.
///
/// Every successful mutation rewrites the whole file.
#[derive(Debug)]
pub struct RequestStore {
    path: Option<PathBuf>,
    requests: Vec<RequestRecord>,
}

impl RequestStore {
    /// Load from `path`. A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let requests = match load(&path) {
            Ok(requests) => {
                info!(path = %path.display(), count = requests.len(), "loaded requests");
                requests
            }
            Err(e) => {
                info!(path = %path.display(), error = %e, "starting with an empty collection");
                Vec::new()
            }
        };
        Self { path: Some(path), requests }
    }

    /// A store that never touches the filesystem.
    #[cfg(test)]
    pub fn in_memory(requests: Vec<RequestRecord>) -> Self {
        Self { path: None, requests }
    }

    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    pub fn get(&self, index: usize) -> Option<&RequestRecord> {
        self.requests.get(index)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Write the whole collection as pretty-printed JSON.
    pub fn save(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.requests)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Append a record; returns its index.
    pub fn add(&mut self, record: RequestRecord) -> Persisted<usize> {
        self.requests.push(record);
        self.persist(self.requests.len() - 1)
    }

    /// Insert an independent copy right after `index`; returns the copy's index.
    pub fn clone(&mut self, index: usize) -> Persisted<Option<usize>> {
        let Some(original) = self.requests.get(index) else {
            return Persisted::untouched(None);
        };
        let copy = original.clone();
        self.requests.insert(index + 1, copy);
        self.persist(Some(index + 1))
    }

    /// Remove the record at `index`. `false` (and no save) when out of range.
    pub fn delete(&mut self, index: usize) -> Persisted<bool> {
        if index >= self.requests.len() {
            return Persisted::untouched(false);
        }
        self.requests.remove(index);
        self.persist(true)
    }

    /// Swap with the predecessor; returns the record's new index.
    pub fn move_up(&mut self, index: usize) -> Persisted<Option<usize>> {
        if index == 0 || index >= self.requests.len() {
            return Persisted::untouched(None);
        }
        self.requests.swap(index - 1, index);
        self.persist(Some(index - 1))
    }

    /// Swap with the successor; returns the record's new index.
    pub fn move_down(&mut self, index: usize) -> Persisted<Option<usize>> {
        if index + 1 >= self.requests.len() {
            return Persisted::untouched(None);
        }
        self.requests.swap(index, index + 1);
        self.persist(Some(index + 1))
    }

    pub fn set_field(&mut self, index: usize, field: Field, value: String) -> Persisted<bool> {
        let updated = self
            .requests
            .get_mut(index)
            .is_some_and(|record| record.set_field(field, value));
        if !updated {
            return Persisted::untouched(false);
        }
        self.persist(true)
    }

    /// Insert or replace a header on the record at `index`.
    pub fn upsert_header(&mut self, index: usize, key: String, value: String) -> Persisted<bool> {
        let Some(record) = self.requests.get_mut(index) else {
            return Persisted::untouched(false);
        };
        record.headers.insert(key, value);
        self.persist(true)
    }

    /// Remove a header if present. Saves either way.
    pub fn remove_header(&mut self, index: usize, key: &str) -> Persisted<bool> {
        let Some(record) = self.requests.get_mut(index) else {
            return Persisted::untouched(false);
        };
        let removed = record.headers.remove(key).is_some();
        self.persist(removed)
    }

    fn persist<T>(&self, value: T) -> Persisted<T> {
        let saved = self.save();
        if let Err(e) = &saved {
            warn!(error = %e, "failed to save requests");
        }
        Persisted { value, saved }
    }
}

fn load(path: &Path) -> Result<Vec<RequestRecord>, AppError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
