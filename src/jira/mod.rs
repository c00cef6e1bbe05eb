//! Jira REST API client module

mod client;
mod credentials;
pub mod filters;

pub use client::JiraClient;
pub use credentials::Credentials;
pub use filters::{format_grants, FilterDetail, FilterSearchPage, FilterSummary, PermissionGrant};
