use crate::humanize::HumanDuration;
use crate::notifier::{EndpointConfig, QueryParams};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointSettings,
    #[serde(default)]
    pub query: QuerySettings,
    #[serde(default)]
    pub poll: PollSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Config {
    pub fn endpoint_config(&self) -> EndpointConfig {
        EndpointConfig::new(self.endpoint.host.clone())
    }

    pub fn query_params(&self) -> QueryParams {
        QueryParams {
            application: self.query.application.clone(),
            component: self.query.component.clone(),
            version: self.query.version.clone(),
        }
    }
}

/// Version service endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EndpointSettings {
    /// Empty means the production version service
    #[serde(default)]
    pub host: String,
}

/// What to ask the version service about
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuerySettings {
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub component: String,
    /// Version of the watched application, if known
    #[serde(default)]
    pub version: String,
}

/// Polling schedule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollSettings {
    #[serde(default = "default_interval")]
    pub interval: HumanDuration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

fn default_interval() -> HumanDuration {
    HumanDuration::from_secs(60 * 60) // 1 hour
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Default tracing filter, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
