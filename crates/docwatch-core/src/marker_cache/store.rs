use std::collections::{BTreeMap, HashMap};

/// Caller-owned mapping from resource identifier to last observed marker.
///
/// Implementations hold at most one marker per identifier; `set` overwrites.
pub trait MarkerStore {
    fn get(&self, resource_id: &str) -> Option<String>;
    fn set(&mut self, resource_id: &str, marker: String);
}

impl MarkerStore for HashMap<String, String> {
    fn get(&self, resource_id: &str) -> Option<String> {
        HashMap::get(self, resource_id).cloned()
    }

    fn set(&mut self, resource_id: &str, marker: String) {
        self.insert(resource_id.to_string(), marker);
    }
}

impl MarkerStore for BTreeMap<String, String> {
    fn get(&self, resource_id: &str) -> Option<String> {
        BTreeMap::get(self, resource_id).cloned()
    }

    fn set(&mut self, resource_id: &str, marker: String) {
        self.insert(resource_id.to_string(), marker);
    }
}

impl<S: MarkerStore + ?Sized> MarkerStore for &mut S {
    fn get(&self, resource_id: &str) -> Option<String> {
        (**self).get(resource_id)
    }

    fn set(&mut self, resource_id: &str, marker: String) {
        (**self).set(resource_id, marker)
    }
}
