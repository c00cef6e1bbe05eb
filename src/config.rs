/// Configuration constants for the Jira REST API
pub mod api {
    /// Page size for the filter search endpoint
    pub const PAGE_SIZE: u32 = 50;

    /// Upper bound on pages fetched from filter search. The API signals the
    /// last page with `isLast`, but a misbehaving server could keep paging
    /// forever; this cap guarantees termination.
    pub const MAX_PAGES: u32 = 200;

    /// Maximum concurrent in-flight detail requests
    pub const MAX_CONCURRENT_DETAIL_REQUESTS: usize = 5;

    /// REST API version used by Jira Cloud instances
    pub const CLOUD_API_VERSION: &str = "3";

    /// REST API version used by Jira Server / Data Center instances
    pub const SERVER_API_VERSION: &str = "2";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for the API secret (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["JIRA_API_TOKEN", "JIRA_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default output file, written to the working directory
    pub const OUTPUT_FILE: &str = "jira_filters.csv";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}
