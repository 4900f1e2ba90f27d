//! Interval polling of the version service
//!
//! A poller waits one interval, fetches, hands the outcome to the callback
//! and waits again. Cancellation is only observed while waiting: a fetch that
//! is already running completes and its outcome is still delivered.

use super::fetcher::{self, FetchError};
use super::models::{EndpointConfig, QueryParams, VersionReport};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Start polling on a background task and return immediately
///
/// `cancel` stops the poller once it reads `true` or once every sender is
/// dropped. `on_result` is called exactly once per tick, from the poller task.
pub fn start<F>(
    params: QueryParams,
    config: EndpointConfig,
    interval: Duration,
    on_result: F,
    cancel: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    F: FnMut(Result<VersionReport, FetchError>) + Send + 'static,
{
    tokio::spawn(run(params, config, interval, on_result, cancel))
}

async fn run<F>(
    params: QueryParams,
    config: EndpointConfig,
    interval: Duration,
    mut on_result: F,
    mut cancel: watch::Receiver<bool>,
) where
    F: FnMut(Result<VersionReport, FetchError>) + Send + 'static,
{
    info!(
        application = %params.application,
        host = config.effective_host(),
        interval_ms = interval.as_millis() as u64,
        "Version poller started"
    );

    let mut ticks: u64 = 0;
    while wait_for_tick(interval, &mut cancel).await {
        ticks += 1;
        debug!(application = %params.application, tick = ticks, "Polling version service");
        let outcome = fetcher::fetch(&params, &config).await;
        on_result(outcome);
    }

    info!(application = %params.application, ticks, "Version poller stopped");
}

/// Sleep for one interval; false if cancelled first
async fn wait_for_tick(interval: Duration, cancel: &mut watch::Receiver<bool>) -> bool {
    if *cancel.borrow_and_update() {
        return false;
    }

    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            biased;
            changed = cancel.changed() => {
                // Err means every sender is gone
                if changed.is_err() || *cancel.borrow_and_update() {
                    return false;
                }
            }
            _ = &mut sleep => return true,
        }
    }
}

/// Owns a running poller and its cancellation sender
///
/// Dropping the handle cancels the poller.
#[derive(Debug)]
pub struct PollerHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn spawn<F>(
        params: QueryParams,
        config: EndpointConfig,
        interval: Duration,
        on_result: F,
    ) -> Self
    where
        F: FnMut(Result<VersionReport, FetchError>) + Send + 'static,
    {
        let (cancel, rx) = watch::channel(false);
        let task = start(params, config, interval, on_result, rx);
        Self { cancel, task }
    }

    /// Signal cancellation without waiting
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel and wait for the poller task to exit
    pub async fn stop(self) {
        self.cancel();
        let _ = self.task.await;
    }
}
