use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Production version service, used when [`EndpointConfig::host`] is empty
pub const DEFAULT_HOST: &str = "https://version.similarweb.engineering";

/// Query parameters for a single version lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Application name, sent as the last path segment
    pub application: String,
    /// Component name, sent as a form value
    pub component: String,
    /// Version the caller is running; accepted but not transmitted
    pub version: String,
}

impl QueryParams {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            ..Default::default()
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Where to send version lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    pub host: String,
}

impl EndpointConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Host to query, falling back to [`DEFAULT_HOST`]
    pub fn effective_host(&self) -> &str {
        let host = if self.host.is_empty() {
            DEFAULT_HOST
        } else {
            self.host.as_str()
        };
        host.strip_suffix('/').unwrap_or(host)
    }

    /// Full lookup URL for an application
    pub fn latest_version_url(&self, application: &str) -> String {
        format!(
            "{}/api/v1/latest-version/{}",
            self.effective_host(),
            application
        )
    }
}

/// Response body of the version service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionReport {
    pub current_version: String,
    pub current_download_url: String,
    pub outdated: bool,
    pub notifications: Vec<Notification>,
}

/// Message attached to a version report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unix timestamp in seconds
    pub date: i64,
    pub message: String,
}

impl Notification {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }
}
