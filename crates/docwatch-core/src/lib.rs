pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod fetch_head;
pub mod ids;
pub mod logging;
pub mod marker_cache;
pub mod retry;

pub use decode::{decode, Document, Format};
pub use error::{DecodeError, FetchError};
pub use fetch::{DocumentFetcher, HttpSession, MarkerProber};
pub use marker_cache::{ChangeDetector, Decision, MarkerFile, MarkerStore, SharedMarkerStore};
