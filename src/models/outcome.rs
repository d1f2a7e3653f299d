use std::fmt;

use serde::{Deserialize, Serialize};

/// Key assigned by the issue tracker, e.g. `ATS-42`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct IssueKey(pub String);

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of submitting one record to the issue tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueCreationOutcome {
    /// Title of the submitted record, for correlation in the UI.
    pub record_title: String,
    #[serde(flatten)]
    pub result: IssueResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IssueResult {
    Created { key: IssueKey },
    Failed { error: String },
}

impl IssueCreationOutcome {
    pub fn created(record_title: impl Into<String>, key: IssueKey) -> Self {
        Self {
            record_title: record_title.into(),
            result: IssueResult::Created { key },
        }
    }

    pub fn failed(record_title: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            record_title: record_title.into(),
            result: IssueResult::Failed {
                error: error.into(),
            },
        }
    }

    pub fn key(&self) -> Option<&IssueKey> {
        match &self.result {
            IssueResult::Created { key } => Some(key),
            IssueResult::Failed { .. } => None,
        }
    }

    pub fn is_created(&self) -> bool {
        self.key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let ok = serde_json::to_value(IssueCreationOutcome::created(
            "Login",
            IssueKey("ATS-1".into()),
        ))
        .unwrap();
        assert_eq!(ok["record_title"], "Login");
        assert_eq!(ok["status"], "created");
        assert_eq!(ok["key"], "ATS-1");

        let err = serde_json::to_value(IssueCreationOutcome::failed("Login", "boom")).unwrap();
        assert_eq!(err["status"], "failed");
        assert_eq!(err["error"], "boom");
    }
}
