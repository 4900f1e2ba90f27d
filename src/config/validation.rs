use super::models::Config;
use std::time::Duration;
use thiserror::Error;

const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No application configured (query.application is required)")]
    MissingApplication,

    #[error("Application name '{0}' must be a single path segment")]
    InvalidApplication(String),

    #[error("Invalid endpoint host '{host}', expected 'http://' or 'https://'")]
    InvalidHostScheme { host: String },

    #[error("Poll interval {actual} is below the minimum of {minimum}")]
    IntervalTooShort { actual: String, minimum: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_query(config)?;
    validate_endpoint(config)?;
    validate_poll(config)?;
    Ok(())
}

fn validate_query(config: &Config) -> Result<(), ValidationError> {
    let application = config.query.application.trim();
    if application.is_empty() {
        return Err(ValidationError::MissingApplication);
    }

    if application.contains('/') {
        return Err(ValidationError::InvalidApplication(application.to_string()));
    }

    Ok(())
}

/// Empty host is allowed and means the default service
fn validate_endpoint(config: &Config) -> Result<(), ValidationError> {
    let host = &config.endpoint.host;
    if host.is_empty() {
        return Ok(());
    }

    if !host.starts_with("http://") && !host.starts_with("https://") {
        return Err(ValidationError::InvalidHostScheme { host: host.clone() });
    }

    Ok(())
}

fn validate_poll(config: &Config) -> Result<(), ValidationError> {
    let interval = config.poll.interval;
    if interval.as_duration() < MIN_POLL_INTERVAL {
        return Err(ValidationError::IntervalTooShort {
            actual: interval.to_string(),
            minimum: crate::humanize::HumanDuration(MIN_POLL_INTERVAL).to_string(),
        });
    }

    Ok(())
}
