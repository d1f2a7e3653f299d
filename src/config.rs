//! Service configuration loaded from environment variables.
//!
//! Model settings:
//! - `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY` (required)
//! - `AZURE_OPENAI_DEPLOYMENT` (default `hackathon-group3`)
//! - `AZURE_OPENAI_API_VERSION` (default `2024-02-01`)
//! - `AZURE_OPENAI_MAX_COMPLETION_TOKENS` (default 2500)
//!
//! Tracker settings:
//! - `JIRA_SERVER`, `JIRA_EMAIL`, `JIRA_API_TOKEN` (required)
//! - `JIRA_PROJECT` (default `ATS`), `JIRA_ISSUE_TYPE` (default `Story`)
//! - `JIRA_REPORTER_ID` (optional)
//!
//! `STORYLINE_MAX_UPLOAD_MB` caps upload size (default 20).
//! `STORYLINE_SESSION_TTL_MINUTES` sets how long an idle session is kept
//! (default 60, must be positive).

use std::time::Duration;

use thiserror::Error;

const DEFAULT_DEPLOYMENT: &str = "hackathon-group3";
const DEFAULT_API_VERSION: &str = "2024-02-01";
const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 2500;
const DEFAULT_PROJECT_KEY: &str = "ATS";
const DEFAULT_ISSUE_TYPE: &str = "Story";
const DEFAULT_MAX_UPLOAD_MB: usize = 20;
const DEFAULT_SESSION_TTL_MINUTES: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
    pub max_completion_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub server: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
    pub issue_type: String,
    /// Atlassian account id to set as reporter. Jira picks the caller when unset.
    pub reporter_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub tracker: TrackerConfig,
    pub max_upload_bytes: usize,
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let llm = LlmConfig {
            endpoint: require("AZURE_OPENAI_ENDPOINT")?,
            api_key: require("AZURE_OPENAI_API_KEY")?,
            deployment: get("AZURE_OPENAI_DEPLOYMENT")
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string()),
            api_version: get("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            max_completion_tokens: parse_or(
                "AZURE_OPENAI_MAX_COMPLETION_TOKENS",
                get("AZURE_OPENAI_MAX_COMPLETION_TOKENS"),
                DEFAULT_MAX_COMPLETION_TOKENS,
            )?,
        };

        let tracker = TrackerConfig {
            server: require("JIRA_SERVER")?,
            email: require("JIRA_EMAIL")?,
            api_token: require("JIRA_API_TOKEN")?,
            project_key: get("JIRA_PROJECT").unwrap_or_else(|| DEFAULT_PROJECT_KEY.to_string()),
            issue_type: get("JIRA_ISSUE_TYPE").unwrap_or_else(|| DEFAULT_ISSUE_TYPE.to_string()),
            reporter_id: get("JIRA_REPORTER_ID"),
        };

        let max_upload_mb: usize = parse_or(
            "STORYLINE_MAX_UPLOAD_MB",
            get("STORYLINE_MAX_UPLOAD_MB"),
            DEFAULT_MAX_UPLOAD_MB,
        )?;
        let max_upload_bytes = max_upload_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| ConfigError::Invalid {
                name: "STORYLINE_MAX_UPLOAD_MB",
                value: max_upload_mb.to_string(),
            })?;

        let ttl_minutes: u64 = parse_or(
            "STORYLINE_SESSION_TTL_MINUTES",
            get("STORYLINE_SESSION_TTL_MINUTES"),
            DEFAULT_SESSION_TTL_MINUTES,
        )?;
        let session_ttl = ttl_minutes
            .checked_mul(60)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::Invalid {
                name: "STORYLINE_SESSION_TTL_MINUTES",
                value: ttl_minutes.to_string(),
            })?;

        Ok(Self {
            llm,
            tracker,
            max_upload_bytes,
            session_ttl,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: v }),
        None => Ok(default),
    }
}
