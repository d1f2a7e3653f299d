//! In-memory session storage.
//!
//! The store is the only shared mutable state in the service. It is handed to
//! every handler through axum state rather than living in a global. Locks are
//! held for a single read or a wholesale replace and never across an `.await`.
//!
//! Sessions end either through [`SessionStore::remove`] or by sitting idle
//! longer than the TTL passed to [`SessionStore::spawn_expiry`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::models::*;

/// Upper bound on how often the expiry task sweeps the store.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, PipelineSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, PipelineSession>> {
        self.sessions.lock().expect("session store lock poisoned")
    }

    /// Start a new, empty session.
    pub fn create(&self) -> SessionSummary {
        let session = PipelineSession::new(Uuid::new_v4());
        let summary = session.summary();
        self.lock().insert(session.id, session);
        tracing::debug!(session_id = %summary.id, "Created session");
        summary
    }

    pub fn get(&self, id: Uuid) -> Option<SessionSummary> {
        self.lock().get_mut(&id).map(|session| {
            session.touch();
            session.summary()
        })
    }

    /// Replace the session's records after a successful generate.
    ///
    /// Returns `None` when the store never issued `id` or the session has
    /// already ended; nothing is stored in that case.
    pub fn set_records(
        &self,
        id: Uuid,
        records: Vec<Record>,
        output: String,
    ) -> Option<SessionSummary> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id)?;
        session.output = Some(output);
        session.set_records(records);
        Some(session.summary())
    }

    /// Current records, or an empty list when the session never generated
    /// anything or does not exist.
    pub fn get_records(&self, id: Uuid) -> Vec<Record> {
        self.lock()
            .get_mut(&id)
            .map(|session| {
                session.touch();
                session.get_records().to_vec()
            })
            .unwrap_or_default()
    }

    /// End a session and drop its records.
    pub fn remove(&self, id: Uuid) -> bool {
        self.lock().remove(&id).is_some()
    }

    /// Drop every session whose last activity is older than `cutoff`.
    /// Returns how many were removed.
    pub fn expire_idle_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle_since(cutoff));
        before - sessions.len()
    }

    /// Drop every session idle for longer than `max_idle`.
    pub fn expire_idle(&self, max_idle: Duration) -> usize {
        let cutoff = chrono::Duration::from_std(max_idle)
            .ok()
            .and_then(|idle| Utc::now().checked_sub_signed(idle));

        match cutoff {
            Some(cutoff) => self.expire_idle_before(cutoff),
            None => 0,
        }
    }

    /// Run [`Self::expire_idle`] periodically on the current tokio runtime.
    pub fn spawn_expiry(&self, max_idle: Duration) -> JoinHandle<()> {
        let store = self.clone();
        let period = max_idle.clamp(Duration::from_secs(1), MAX_SWEEP_INTERVAL);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let expired = store.expire_idle(max_idle);
                if expired > 0 {
                    tracing::info!(expired, remaining = store.len(), "Expired idle sessions");
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
