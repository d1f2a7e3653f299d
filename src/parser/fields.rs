use std::sync::LazyLock;

use regex::Regex;

use crate::models::Record;

/// Narrative labels the model tends to put in story titles, removed in this order.
const NARRATIVE_LABELS: [&str; 4] = ["User Story:", "Story:", "User Story -", "Story -"];

/// "Acceptance Criteria" followed by a colon later on the same line.
static ACCEPTANCE_CRITERIA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)acceptance criteria[^\n]*?:").expect("regex for acceptance criteria")
});

/// Turn one segmented block into a record.
///
/// The first line becomes the title; the detail comes from an acceptance
/// criteria section in the remaining lines, if there is one.
pub fn extract_record(block: &str) -> Record {
    let block = block.trim();
    let (title_line, rest) = block.split_once('\n').unwrap_or((block, ""));
    Record::new(clean_title(title_line), extract_detail(rest))
}

/// Remove every occurrence of the narrative labels (case-sensitive), then trim.
///
/// Labels are removed wherever they appear, so wrapped forms such as
/// `**User Story:** Login` or `TC001 - Story: Login` lose the label but keep
/// the surrounding punctuation. Lines without a label are returned trimmed.
pub fn clean_title(line: &str) -> String {
    NARRATIVE_LABELS
        .iter()
        .fold(line.to_string(), |title, label| title.replace(label, ""))
        .trim()
        .to_string()
}

/// Everything after the first "Acceptance Criteria ...:" heading, trimmed.
pub fn extract_detail(text: &str) -> &str {
    ACCEPTANCE_CRITERIA
        .find(text)
        .map(|m| text[m.end()..].trim())
        .unwrap_or("")
}
