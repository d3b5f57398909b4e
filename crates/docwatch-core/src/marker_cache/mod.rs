//! Etag-based change detection.
//!
//! Before downloading and parsing a remote document, a caller asks whether it
//! changed since the last run. The check issues a metadata-only probe, compares
//! the returned marker (normally `ETag`) with the one recorded in a caller-owned
//! [`MarkerStore`], and records the new marker when it differs.
//!
//! This is not HTTP conditional-request semantics: no `If-None-Match` is sent,
//! and a "process" answer is followed by a separate full GET issued by the
//! caller, so a changed document costs two round trips.

mod persist;
mod shared;
mod store;

pub use persist::MarkerFile;
pub use shared::SharedMarkerStore;
pub use store::MarkerStore;

use crate::error::FetchError;
use crate::fetch::MarkerProber;

/// Header carrying the marker unless configured otherwise.
pub const DEFAULT_MARKER_HEADER: &str = "ETag";

/// Outcome of a single change check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The resource sent no marker, so changes cannot be detected. Always process.
    MarkerUnsupported,
    /// First marker seen for this resource; it was recorded.
    New,
    /// Marker differs from the recorded one; the new marker was recorded.
    Changed,
    /// Marker matches the recorded one; nothing to do.
    Unchanged,
}

impl Decision {
    /// Whether the caller should fetch and process the resource.
    pub fn needs_processing(self) -> bool {
        !matches!(self, Decision::Unchanged)
    }

    /// Whether the store was written for this decision.
    pub fn records_marker(self) -> bool {
        matches!(self, Decision::New | Decision::Changed)
    }

    /// Pure comparison of the recorded marker against the probed one.
    pub fn from_markers(stored: Option<&str>, probed: Option<&str>) -> Self {
        match (stored, probed) {
            (_, None) => Decision::MarkerUnsupported,
            (Some(s), Some(p)) if s == p => Decision::Unchanged,
            (Some(_), Some(_)) => Decision::Changed,
            (None, Some(_)) => Decision::New,
        }
    }
}

/// Decides whether remote resources need processing, using a [`MarkerProber`].
#[derive(Debug, Clone)]
pub struct ChangeDetector<P> {
    prober: P,
    header: String,
}

impl<P: MarkerProber> ChangeDetector<P> {
    /// Detector reading the `ETag` header.
    pub fn new(prober: P) -> Self {
        Self::with_header(prober, DEFAULT_MARKER_HEADER)
    }

    /// Detector reading a custom marker header.
    pub fn with_header(prober: P, header: impl Into<String>) -> Self {
        Self {
            prober,
            header: header.into(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Returns true when `resource_id` should be fetched and processed.
    ///
    /// Probe failures propagate and leave `store` untouched. A resource that
    /// sends no marker is always processed and never recorded.
    pub fn should_process<S>(&self, resource_id: &str, store: &mut S) -> Result<bool, FetchError>
    where
        S: MarkerStore + ?Sized,
    {
        self.check(resource_id, store).map(Decision::needs_processing)
    }

    /// Like [`should_process`](Self::should_process) but returns the named decision.
    pub fn check<S>(&self, resource_id: &str, store: &mut S) -> Result<Decision, FetchError>
    where
        S: MarkerStore + ?Sized,
    {
        if resource_id.is_empty() {
            return Err(FetchError::InvalidResource(String::new()));
        }

        let probed = self
            .prober
            .probe_marker(resource_id, &self.header)?
            .filter(|m| !m.is_empty());
        let stored = store.get(resource_id);
        let decision = Decision::from_markers(stored.as_deref(), probed.as_deref());

        if let (true, Some(marker)) = (decision.records_marker(), probed) {
            store.set(resource_id, marker);
        }

        tracing::debug!(
            resource = resource_id,
            header = %self.header,
            ?decision,
            "change check"
        );
        Ok(decision)
    }

    /// Check against a store shared between threads.
    ///
    /// Checks of the same identifier are serialized for the whole
    /// probe-compare-record sequence; different identifiers run concurrently.
    pub fn check_shared(
        &self,
        resource_id: &str,
        store: &SharedMarkerStore,
    ) -> Result<Decision, FetchError> {
        let lock = store.lock_for(resource_id);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut view = store.view();
        self.check(resource_id, &mut view)
    }

    pub fn should_process_shared(
        &self,
        resource_id: &str,
        store: &SharedMarkerStore,
    ) -> Result<bool, FetchError> {
        self.check_shared(resource_id, store)
            .map(Decision::needs_processing)
    }
}
