//! Connection credentials: flag/env resolution with interactive fallback

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use log::debug;

use crate::cli::{Cli, InstanceType};
use crate::config::credentials;
use crate::error::Result;

/// Everything needed to talk to one Jira instance for one run
#[derive(Debug, Clone)]
pub struct Credentials {
    pub instance: InstanceType,
    pub base_url: String,
    pub username: String,
    secret: String,
}

impl Credentials {
    /// Create credentials from already-known values.
    ///
    /// Trailing slashes are stripped from the base URL so request paths can
    /// be appended unconditionally.
    pub fn new(instance: InstanceType, base_url: &str, username: &str, secret: &str) -> Self {
        Self {
            instance,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            username: username.trim().to_string(),
            secret: secret.to_string(),
        }
    }

    /// Resolve credentials from CLI flags, environment, and interactive
    /// prompts, in that order. The secret prompt never echoes input.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let theme = ColorfulTheme::default();

        let instance = match cli.instance {
            Some(instance) => instance,
            None => {
                let idx = Select::with_theme(&theme)
                    .with_prompt("Instance type")
                    .items(&["cloud", "server"])
                    .default(0)
                    .interact()?;
                match idx {
                    0 => InstanceType::Cloud,
                    _ => InstanceType::Server,
                }
            }
        };
        debug!("Using instance type: {}", instance);

        let base_url: String = match &cli.base_url {
            Some(url) => url.clone(),
            None => Input::with_theme(&theme)
                .with_prompt("Jira instance URL")
                .interact_text()?,
        };

        let username: String = match &cli.user {
            Some(user) => user.clone(),
            None => Input::with_theme(&theme)
                .with_prompt("Username")
                .interact_text()?,
        };

        let secret = resolve_secret(cli, instance, &theme)?;

        Ok(Self::new(instance, &base_url, &username, &secret))
    }

    /// REST API version path segment, decided by the instance type and
    /// applied to every request in the run
    pub fn api_version(&self) -> &'static str {
        self.instance.api_version()
    }

    /// `Basic <base64(username:secret)>`, computed once and reused on every
    /// request
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.secret);
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

/// Secret resolution with fallback:
/// 1. CLI argument (if provided)
/// 2. Environment variables (JIRA_API_TOKEN, JIRA_TOKEN - in order)
/// 3. Masked interactive prompt
fn resolve_secret(cli: &Cli, instance: InstanceType, theme: &ColorfulTheme) -> Result<String> {
    if let Some(token) = &cli.token {
        debug!("Using secret from CLI argument");
        return Ok(token.clone());
    }

    for env_var in credentials::TOKEN_ENV_VARS {
        if let Ok(token) = std::env::var(env_var) {
            debug!("Using secret from {} environment variable", env_var);
            return Ok(token);
        }
    }

    let secret = Password::with_theme(theme)
        .with_prompt(format!("Enter {}", instance.secret_label()))
        .interact()?;
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let creds = Credentials::new(
            InstanceType::Cloud,
            "https://example.atlassian.net",
            "alice",
            "secret",
        );
        // base64("alice:secret")
        assert_eq!(creds.basic_auth_header(), "Basic YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let creds = Credentials::new(
            InstanceType::Server,
            "https://jira.example.com/ ",
            "bob",
            "pw",
        );
        assert_eq!(creds.base_url, "https://jira.example.com");
    }

    #[test]
    fn test_api_version_follows_instance_type() {
        let cloud = Credentials::new(InstanceType::Cloud, "https://x", "u", "s");
        let server = Credentials::new(InstanceType::Server, "https://x", "u", "s");
        assert_eq!(cloud.api_version(), "3");
        assert_eq!(server.api_version(), "2");
    }

    #[test]
    fn test_username_is_trimmed() {
        let creds = Credentials::new(InstanceType::Cloud, "https://x", " alice ", "s");
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.basic_auth_header(), "Basic YWxpY2U6cw==");
    }
}
