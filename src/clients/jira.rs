//! Jira Cloud REST client that creates one issue per record.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::IssueTracker;
use crate::config::TrackerConfig;
use crate::models::IssueKey;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker answered with something other than `201 Created`.
    #[error("Error {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Tracker response had no issue key")]
    MissingKey,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JiraClient {
    config: TrackerConfig,
    client: Client,
}

impl JiraClient {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn issue_url(&self) -> String {
        format!("{}/rest/api/3/issue", self.server())
    }

    fn server(&self) -> &str {
        self.config.server.trim_end_matches('/')
    }

    /// Issue body with the description wrapped as a one-paragraph ADF document.
    fn payload(&self, summary: &str, description: &str) -> Value {
        let mut fields = json!({
            "project": { "key": self.config.project_key },
            "summary": summary,
            "issuetype": { "name": self.config.issue_type },
            "description": {
                "type": "doc",
                "version": 1,
                "content": [
                    {
                        "type": "paragraph",
                        "content": [
                            { "type": "text", "text": description }
                        ]
                    }
                ]
            }
        });

        if let Some(ref reporter) = self.config.reporter_id {
            fields["reporter"] = json!({ "id": reporter });
        }

        json!({ "fields": fields })
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn create_issue(
        &self,
        summary: &str,
        description: &str,
    ) -> Result<IssueKey, TrackerError> {
        let response = self
            .client
            .post(self.issue_url())
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .header("Accept", "application/json")
            .json(&self.payload(summary, description))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(TrackerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedIssue = response.json().await?;
        created.key.map(IssueKey).ok_or(TrackerError::MissingKey)
    }

    fn browse_url(&self) -> Option<String> {
        Some(format!("{}/browse", self.server()))
    }
}
