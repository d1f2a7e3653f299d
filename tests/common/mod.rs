//! Test doubles for the external collaborators.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storyline::api::AppState;
use storyline::clients::{
    ExportError, IssueTracker, LlmError, TableWriter, TextGenerator, TrackerError,
};
use storyline::models::IssueKey;
use storyline::pipeline::ExportRow;

/// Returns a canned answer, or a failure, and remembers every prompt it saw.
pub struct FakeGenerator {
    answer: Option<String>,
    broken: AtomicBool,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl FakeGenerator {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(answer.to_string()),
            broken: AtomicBool::new(false),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            broken: AtomicBool::new(true),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Make every following call fail.
    pub fn break_now(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        if self.broken.load(Ordering::SeqCst) {
            return Err(LlmError::Status {
                status: 503,
                body: "model overloaded".to_string(),
            });
        }
        Ok(self.answer.clone().unwrap_or_default())
    }
}

/// Hands out sequential `ATS-n` keys, rejecting any title in `failing`.
pub struct FakeTracker {
    failing: HashSet<String>,
    next: AtomicUsize,
    pub submitted: Mutex<Vec<(String, String)>>,
}

impl FakeTracker {
    pub fn new() -> Arc<Self> {
        Self::failing_on(&[])
    }

    pub fn failing_on(titles: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            failing: titles.iter().map(|t| t.to_string()).collect(),
            next: AtomicUsize::new(1),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    pub fn submitted(&self) -> Vec<(String, String)> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn create_issue(
        &self,
        summary: &str,
        description: &str,
    ) -> Result<IssueKey, TrackerError> {
        self.submitted
            .lock()
            .unwrap()
            .push((summary.to_string(), description.to_string()));

        if self.failing.contains(summary) {
            return Err(TrackerError::Rejected {
                status: 400,
                body: "summary rejected".to_string(),
            });
        }

        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(IssueKey(format!("ATS-{}", n)))
    }

    fn browse_url(&self) -> Option<String> {
        Some("https://tracker.test/browse".to_string())
    }
}

/// Records the rows it was asked to write and returns a fixed blob.
#[derive(Default)]
pub struct RecordingWriter {
    pub rows: Mutex<Vec<Vec<ExportRow>>>,
}

impl RecordingWriter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl TableWriter for RecordingWriter {
    fn write_table(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
        self.rows.lock().unwrap().push(rows.to_vec());
        Ok(b"fake-xlsx".to_vec())
    }
}

pub fn app_state(
    generator: Arc<FakeGenerator>,
    tracker: Arc<FakeTracker>,
    writer: Arc<RecordingWriter>,
) -> AppState {
    AppState::new(generator, tracker, writer)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
