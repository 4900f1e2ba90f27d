//! Latest-version lookups against the version service
//!
//! [`fetch`] performs one bounded lookup. [`start`] and [`PollerHandle`] run
//! lookups on a fixed interval and report every outcome to a callback.

pub mod fetcher;
pub mod models;
pub mod poller;

pub use fetcher::{FetchError, REQUEST_TIMEOUT, fetch};
pub use models::{DEFAULT_HOST, EndpointConfig, Notification, QueryParams, VersionReport};
pub use poller::{PollerHandle, start};
