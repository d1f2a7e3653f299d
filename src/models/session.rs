use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::Record;

/// The record set for one user between pipeline stages.
///
/// A session is created empty on first interaction. Every successful generate
/// replaces its records wholesale; review, issue creation and export only read
/// them. Nothing survives once the session is removed from the store, either
/// explicitly or after sitting idle past the configured TTL.
#[derive(Debug, Clone)]
pub struct PipelineSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Last time any request read or wrote this session.
    pub last_active_at: DateTime<Utc>,
    /// Raw model output from the last successful generate.
    pub output: Option<String>,
    records: Vec<Record>,
}

impl PipelineSession {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            last_active_at: now,
            output: None,
            records: Vec::new(),
        }
    }

    /// Replace the whole record set. Never merges or appends.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.updated_at = Utc::now();
        self.last_active_at = self.updated_at;
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// Whether the session has been idle since before `cutoff`.
    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_active_at < cutoff
    }

    pub fn get_records(&self) -> &[Record] {
        &self.records
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            record_count: self.records.len(),
        }
    }
}

/// Session metadata returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record_count: usize,
}
