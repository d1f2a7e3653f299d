//! External collaborators the pipeline talks to.
//!
//! Each collaborator sits behind a trait so the pipeline and the HTTP layer
//! can be exercised with fakes. The default implementations are:
//!
//! - [`AzureOpenAiClient`] for [`TextGenerator`]
//! - [`JiraClient`] for [`IssueTracker`]
//! - [`XlsxTableWriter`] for [`TableWriter`]
//! - [`document::extract_text`] for uploaded PDF and plain text documents

pub mod document;
mod jira;
mod openai;
mod xlsx;

pub use document::{DocumentKind, ExtractError};
pub use jira::{JiraClient, TrackerError};
pub use openai::{AzureOpenAiClient, LlmError};
pub use xlsx::{ExportError, XlsxTableWriter};

use async_trait::async_trait;

use crate::models::IssueKey;
use crate::pipeline::ExportRow;

/// A generative model that answers a system instruction plus a user prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// An issue tracker that can create one issue per call.
///
/// Non-success responses come back as `Err`, never as a key-shaped string.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    async fn create_issue(&self, summary: &str, description: &str)
        -> Result<IssueKey, TrackerError>;

    /// Base URL users can follow to see created issues, if there is one.
    fn browse_url(&self) -> Option<String> {
        None
    }
}

/// Serializes export rows into a downloadable spreadsheet.
pub trait TableWriter: Send + Sync {
    fn write_table(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ExportError>;
}
