use clap::{Parser, Subcommand};
use std::path::PathBuf;
use version_notifier::config::{Config, HumanDuration};

#[derive(Parser, Debug)]
#[command(name = "version-notifier")]
#[command(about = "Check a version service for the latest release", long_about = None)]
pub struct Cli {
    /// TOML configuration file (defaults to $VERSION_NOTIFIER_CONFIG or config/version-notifier.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the latest version once and print it as JSON
    Check(QueryArgs),
    /// Poll the version service until interrupted
    Watch(WatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Version service base URL
    #[arg(long)]
    pub host: Option<String>,

    /// Application to look up
    #[arg(long)]
    pub application: Option<String>,

    /// Component of the application
    #[arg(long)]
    pub component: Option<String>,

    /// Version of the application currently running
    #[arg(long)]
    pub app_version: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Time between lookups (e.g. 30s, 5m, 1h)
    #[arg(long)]
    pub interval: Option<HumanDuration>,
}

impl QueryArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.endpoint.host = host.clone();
        }
        if let Some(application) = &self.application {
            config.query.application = application.clone();
        }
        if let Some(component) = &self.component {
            config.query.component = component.clone();
        }
        if let Some(version) = &self.app_version {
            config.query.version = version.clone();
        }
    }
}

impl WatchArgs {
    pub fn apply(&self, config: &mut Config) {
        self.query.apply(config);
        if let Some(interval) = self.interval {
            config.poll.interval = interval;
        }
    }
}
