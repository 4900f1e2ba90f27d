//! HTTP client for the version service

use super::models::{EndpointConfig, QueryParams, VersionReport};
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Upper bound for one lookup, from request start to the full body
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

const USER_AGENT: &str = concat!("version-notifier/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("version request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid version response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Whether the request hit [`REQUEST_TIMEOUT`]
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Transport(e) => e.is_timeout(),
            FetchError::Decode(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Look up the latest version of an application once
///
/// The component travels as a form-encoded body on a GET, which is what the
/// version service expects. The status code is not checked: whatever body
/// comes back must decode as a [`VersionReport`].
pub async fn fetch(params: &QueryParams, config: &EndpointConfig) -> Result<VersionReport> {
    let url = config.latest_version_url(&params.application);
    let started = Instant::now();

    debug!(application = %params.application, url = %url, "Requesting latest version");

    // No idle pooling: each lookup owns its connection
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(0)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Transport)?;

    let response = client
        .get(&url)
        .form(&[("component", params.component.as_str())])
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        warn!(url = %url, status = status.as_u16(), "Version service returned non-success status");
    }

    let body = response.bytes().await.map_err(FetchError::Transport)?;
    let report: VersionReport = serde_json::from_slice(&body).map_err(FetchError::Decode)?;

    debug!(
        application = %params.application,
        current_version = %report.current_version,
        outdated = report.outdated,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Latest version received"
    );

    Ok(report)
}
