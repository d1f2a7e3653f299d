mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::clients::{
    AzureOpenAiClient, IssueTracker, JiraClient, TableWriter, TextGenerator, XlsxTableWriter,
};
use crate::config::AppConfig;
use crate::store::SessionStore;

pub use handlers::{CreateIssuesInput, IssuesResponse};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Everything a handler needs: session state plus the external collaborators.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub generator: Arc<dyn TextGenerator>,
    pub tracker: Arc<dyn IssueTracker>,
    pub table_writer: Arc<dyn TableWriter>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        tracker: Arc<dyn IssueTracker>,
        table_writer: Arc<dyn TableWriter>,
    ) -> Self {
        Self {
            sessions: SessionStore::new(),
            generator,
            tracker,
            table_writer,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Wire up the Azure OpenAI, Jira and xlsx implementations.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut state = Self::new(
            Arc::new(AzureOpenAiClient::new(config.llm.clone())),
            Arc::new(JiraClient::new(config.tracker.clone())),
            Arc::new(XlsxTableWriter),
        );
        state.max_upload_bytes = config.max_upload_bytes;
        state
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{id}", get(handlers::get_session))
        .route("/sessions/{id}", delete(handlers::delete_session))
        .route("/sessions/{id}/records", get(handlers::get_records))
        // Pipeline
        .route("/sessions/{id}/generate", post(handlers::generate))
        .route("/sessions/{id}/issues", post(handlers::create_issues))
        .route("/sessions/{id}/export", get(handlers::export_records))
        // Health
        .route("/health", get(handlers::health));

    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}
