use serde::{Deserialize, Serialize};

/// Maximum length of a record title, counted in characters.
pub const MAX_TITLE_CHARS: usize = 150;

/// A single user story or test case.
///
/// The detail holds whatever followed an "Acceptance Criteria:" heading in the
/// source block and is empty when the block had none. On the wire the detail
/// is called `description`, matching what the issue tracker receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    #[serde(rename = "description", default)]
    pub detail: String,
}

impl Record {
    /// Build a record, truncating the title to [`MAX_TITLE_CHARS`].
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: truncate_chars(title.into(), MAX_TITLE_CHARS),
            detail: detail.into(),
        }
    }
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
