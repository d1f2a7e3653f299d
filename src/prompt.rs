//! Prompt text sent to the generative model.

/// System instruction for every generate request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a strict assistant. Only respond with details directly relevant to the user's instruction.";

/// Build the user prompt from the extracted document text and the instruction.
///
/// The format hints ask for `1) User Story: ...` or `1) TC001 : ...` lines so
/// the output can be segmented by the record parser.
pub fn build_prompt(document_text: &str, instruction: &str) -> String {
    format!(
        "BRD Content:\n\
         {document_text}\n\
         \n\
         User Instruction:\n\
         {instruction}\n\
         \n\
         Your job is to only extract information relevant to this instruction.\n\
         If prompt contains user stories, the format should be like 1) User Story: story description \
         like User login with email or mobile + password for each requirement\n\
         If prompt contains test cases, the format should be like 1) TC001 : Test case description \
         for each requirement\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_document_and_instruction() {
        let prompt = build_prompt("The app shall support SSO.", "Write user stories");
        assert!(prompt.starts_with("BRD Content:\nThe app shall support SSO.\n"));
        assert!(prompt.contains("User Instruction:\nWrite user stories\n"));
    }

    #[test]
    fn asks_for_numbered_markers() {
        let prompt = build_prompt("", "");
        assert!(prompt.contains("1) User Story:"));
        assert!(prompt.contains("1) TC001 :"));
    }
}
