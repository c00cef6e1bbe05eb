//! CLI argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{api, defaults};

/// Jira filter permission exporter CLI
///
/// Every connection value can be supplied by flag; anything missing is
/// prompted for interactively (the secret with masked input).
#[derive(Parser, Debug)]
#[command(name = "jfctl")]
#[command(version)]
#[command(about = "Export Jira saved-filter permissions to CSV", long_about = None)]
pub struct Cli {
    /// Jira instance type (selects REST API version)
    #[arg(short, long, value_enum)]
    pub instance: Option<InstanceType>,

    /// Base URL of the Jira instance (e.g. https://example.atlassian.net)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Username (email address for Cloud instances)
    #[arg(short, long)]
    pub user: Option<String>,

    /// API token or password (overrides env vars; prompted when missing)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = defaults::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Maximum number of filter-search pages to fetch
    #[arg(long, default_value_t = api::MAX_PAGES)]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = defaults::REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Suppress the progress bar
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// Jira deployment flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstanceType {
    /// Atlassian Cloud (REST API v3)
    Cloud,
    /// Server / Data Center (REST API v2)
    Server,
}

impl InstanceType {
    /// REST API version path segment for this deployment flavor
    pub fn api_version(&self) -> &'static str {
        match self {
            InstanceType::Cloud => api::CLOUD_API_VERSION,
            InstanceType::Server => api::SERVER_API_VERSION,
        }
    }

    /// Wording used when prompting for the secret
    pub fn secret_label(&self) -> &'static str {
        match self {
            InstanceType::Cloud => "API key",
            InstanceType::Server => "Password",
        }
    }
}

impl std::fmt::Display for InstanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceType::Cloud => write!(f, "cloud"),
            InstanceType::Server => write!(f, "server"),
        }
    }
}
