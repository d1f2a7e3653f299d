use serde::Serialize;

use crate::clients::{LlmError, TextGenerator};
use crate::models::Record;
use crate::parser;
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};

/// Raw model output together with the records parsed from it.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub output: String,
    pub records: Vec<Record>,
}

/// Ask the model for stories or test cases and parse its answer.
///
/// Model failures are returned as-is; the caller decides how to report them
/// and must leave the session's existing records untouched.
pub async fn generate(
    generator: &dyn TextGenerator,
    document_text: &str,
    instruction: &str,
) -> Result<Generation, LlmError> {
    let prompt = build_prompt(document_text, instruction);
    let output = generator.generate(SYSTEM_INSTRUCTION, &prompt).await?;
    let records = parser::parse(&output);

    tracing::info!(records = records.len(), "Generated records from document");
    Ok(Generation { output, records })
}
