pub mod config;
pub mod humanize;
pub mod notifier;
pub mod observability;

pub use notifier::{
    DEFAULT_HOST, EndpointConfig, FetchError, Notification, PollerHandle, QueryParams,
    VersionReport, fetch,
};
