//! Thread-safe marker store with per-identifier locks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::MarkerStore;

/// Marker store that can be shared between threads.
///
/// Besides the map itself it keeps a registry of identifier -> lock, so a
/// whole check sequence for one identifier can run under mutual exclusion
/// (see `ChangeDetector::check_shared`).
///
/// The registry gains one entry per identifier ever locked and is never
/// pruned, the same as the marker map. Both grow with the set of watched
/// resources, so eviction belongs to whoever owns the store.
#[derive(Debug, Default)]
pub struct SharedMarkerStore {
    markers: Mutex<HashMap<String, String>>,
    locks: RwLock<HashMap<String, Arc<Mutex<()>>>>,
}

impl SharedMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(markers: HashMap<String, String>) -> Self {
        Self {
            markers: Mutex::new(markers),
            locks: RwLock::default(),
        }
    }

    /// Lock guarding check sequences for `resource_id`; created on first use.
    pub fn lock_for(&self, resource_id: &str) -> Arc<Mutex<()>> {
        if let Some(lock) = self
            .locks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(resource_id)
        {
            return Arc::clone(lock);
        }
        let mut locks = self.locks.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(resource_id.to_string()).or_default())
    }

    pub fn get(&self, resource_id: &str) -> Option<String> {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(resource_id)
            .cloned()
    }

    pub fn set(&self, resource_id: &str, marker: String) {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(resource_id.to_string(), marker);
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.markers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.markers
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn view(&self) -> SharedView<'_> {
        SharedView(self)
    }
}

/// `MarkerStore` adapter over a shared reference.
pub(super) struct SharedView<'a>(&'a SharedMarkerStore);

impl MarkerStore for SharedView<'_> {
    fn get(&self, resource_id: &str) -> Option<String> {
        self.0.get(resource_id)
    }

    fn set(&mut self, resource_id: &str, marker: String) {
        self.0.set(resource_id, marker)
    }
}

impl MarkerStore for SharedMarkerStore {
    fn get(&self, resource_id: &str) -> Option<String> {
        SharedMarkerStore::get(self, resource_id)
    }

    fn set(&mut self, resource_id: &str, marker: String) {
        SharedMarkerStore::set(self, resource_id, marker)
    }
}
