use std::time::Duration;
use tracing::{error, info, warn};
use version_notifier::config::Config;
use version_notifier::notifier::{self, FetchError, PollerHandle, VersionReport};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub async fn check(config: Config) -> Result<(), AnyError> {
    let params = config.query_params();
    let endpoint = config.endpoint_config();

    let report = notifier::fetch(&params, &endpoint).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

pub async fn watch(config: Config) -> Result<(), AnyError> {
    let params = config.query_params();
    let endpoint = config.endpoint_config();
    let interval: Duration = config.poll.interval.as_duration();
    let running_version = params.version.clone();

    info!(
        application = %params.application,
        interval = %config.poll.interval,
        "Watching for new versions"
    );

    let poller = PollerHandle::spawn(params, endpoint, interval, move |outcome| {
        report_outcome(&running_version, outcome)
    });

    shutdown_signal().await;
    poller.stop().await;

    Ok(())
}

fn report_outcome(running_version: &str, outcome: Result<VersionReport, FetchError>) {
    match outcome {
        Ok(report) if report.outdated => {
            warn!(
                running_version,
                current_version = %report.current_version,
                download_url = %report.current_download_url,
                "A newer version is available"
            );
            log_notifications(&report);
        }
        Ok(report) => {
            info!(current_version = %report.current_version, "Up to date");
            log_notifications(&report);
        }
        Err(e) if e.is_timeout() => error!(error = %e, "Version service timed out"),
        Err(e) => error!(error = %e, "Version check failed"),
    }
}

fn log_notifications(report: &VersionReport) {
    for notification in &report.notifications {
        let published = notification
            .published_at()
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| notification.date.to_string());
        info!(published = %published, message = %notification.message, "Notification");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
