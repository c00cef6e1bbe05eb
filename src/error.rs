use std::fmt;

/// Custom error type for Jira operations
#[derive(Debug)]
pub enum JiraError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Failed to read or write the report file
    Report(String),
    /// Interactive prompt failed or was aborted
    Prompt(String),
}

impl fmt::Display for JiraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JiraError::Http(e) => write!(f, "HTTP request failed: {}", e),
            JiraError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            JiraError::Json(msg) => write!(f, "JSON error: {}", msg),
            JiraError::Report(msg) => write!(f, "Report error: {}", msg),
            JiraError::Prompt(msg) => write!(f, "Prompt error: {}", msg),
        }
    }
}

impl std::error::Error for JiraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JiraError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JiraError {
    fn from(err: reqwest::Error) -> Self {
        JiraError::Http(err)
    }
}

impl From<serde_json::Error> for JiraError {
    fn from(err: serde_json::Error) -> Self {
        JiraError::Json(err.to_string())
    }
}

impl From<std::io::Error> for JiraError {
    fn from(err: std::io::Error) -> Self {
        JiraError::Report(err.to_string())
    }
}

impl From<dialoguer::Error> for JiraError {
    fn from(err: dialoguer::Error) -> Self {
        JiraError::Prompt(err.to_string())
    }
}

/// Result type alias for Jira operations
pub type Result<T> = std::result::Result<T, JiraError>;
