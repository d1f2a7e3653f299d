//! Text extraction for uploaded requirements documents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Only PDF and TXT files are supported.")]
    Unsupported,

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Text file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Document kinds the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Decide the kind from the uploaded file name's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Extract plain text from an uploaded document.
pub fn extract_text(filename: &str, bytes: Vec<u8>) -> Result<String, ExtractError> {
    match DocumentKind::from_filename(filename) {
        Some(DocumentKind::Pdf) => {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        Some(DocumentKind::Text) => Ok(String::from_utf8(bytes)?),
        None => Err(ExtractError::Unsupported),
    }
}
