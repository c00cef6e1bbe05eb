//! jfctl - Export Jira saved-filter permissions to CSV
//!
//! A single-run CLI that authenticates against a Jira instance (Cloud or
//! Server/Data Center), lists all saved search filters, fetches each
//! filter's detail record concurrently, and writes a flattened permission
//! report.
//!
//! # Features
//!
//! - Interactive credential prompting with masked secret input
//! - HTTP Basic auth against REST API v3 (Cloud) or v2 (Server)
//! - Automatic pagination of the filter search endpoint with a defensive
//!   page cap
//! - Bounded concurrent detail fetching with a progress bar
//! - Human-readable flattening of share/edit permission grants
//!
//! # Example
//!
//! ```bash
//! # Fully interactive
//! jfctl
//!
//! # Non-interactive, secret from the environment
//! export JIRA_API_TOKEN=...
//! jfctl -i cloud -b https://example.atlassian.net -u alice@example.com
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod jira;
pub mod output;
pub mod ui;

pub use cli::{Cli, InstanceType};
pub use error::{JiraError, Result};
pub use jira::{
    format_grants, Credentials, FilterDetail, FilterSearchPage, FilterSummary, JiraClient,
    PermissionGrant,
};
pub use output::{build_rows, write_report, ReportRow};
