//! The generate → review → commit pipeline.
//!
//! - [`generate`]: document text + instruction → model output → records
//! - [`create_batch`]: records → one tracker issue each, tolerating failures
//! - [`export`]: records → spreadsheet artifact

mod batcher;
mod export;
mod generate;

pub use batcher::create_batch;
pub use export::{export, ExportArtifact, ExportRow, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
pub use generate::{generate, Generation};

use thiserror::Error;

use crate::clients::ExportError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A commit action was attempted without any records to commit.
    #[error("No stories available. Please generate stories first.")]
    NoRecords,

    #[error(transparent)]
    Export(#[from] ExportError),
}
