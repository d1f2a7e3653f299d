use serde::Serialize;

use super::PipelineError;
use crate::clients::TableWriter;
use crate::models::Record;

pub const EXPORT_FILENAME: &str = "TestCases.xlsx";
pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// One spreadsheet row. The title is shown under the "Stories" column.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "Stories")]
    pub stories: String,
    pub description: String,
}

impl ExportRow {
    /// Column headers, in the order the fields are written.
    pub const COLUMNS: [&'static str; 2] = ["Stories", "description"];
}

impl From<&Record> for ExportRow {
    fn from(record: &Record) -> Self {
        Self {
            stories: record.title.clone(),
            description: record.detail.clone(),
        }
    }
}

/// A serialized spreadsheet ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Project records into rows and hand them to the table writer.
///
/// An empty record set is rejected before the writer is called.
pub fn export(writer: &dyn TableWriter, records: &[Record]) -> Result<ExportArtifact, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::NoRecords);
    }

    let rows: Vec<ExportRow> = records.iter().map(ExportRow::from).collect();
    let bytes = writer.write_table(&rows)?;

    tracing::info!(rows = rows.len(), bytes = bytes.len(), "Exported records");
    Ok(ExportArtifact {
        filename: EXPORT_FILENAME,
        content_type: EXPORT_CONTENT_TYPE,
        bytes,
    })
}
