//! Domain models for storyline.
//!
//! # Core Concepts
//!
//! - [`Record`]: A user story or test case parsed out of one numbered block of
//!   model output. Titles are capped at [`MAX_TITLE_CHARS`] characters.
//! - [`PipelineSession`]: Per-user container holding the current record set
//!   between the generate, review and commit steps. Records are replaced
//!   wholesale on every successful generate.
//! - [`IssueCreationOutcome`]: Per-record result of pushing a record into the
//!   issue tracker, either a tracker-assigned key or an error message.

mod outcome;
mod record;
mod session;

pub use outcome::*;
pub use record::*;
pub use session::*;
