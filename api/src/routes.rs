use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use docqa_core::{DocumentProcessor, QueryService};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::api_response::panic_response;
use crate::handlers;

pub const API_ENDPOINTS: [&str; 3] = [
    "/api/health",
    "/api/process-documents",
    "/api/ask-question",
];

/// Everything a request can touch. Built once in `main`, read-only after.
pub struct AppState {
    pub processor: DocumentProcessor,
    pub queries: QueryService,
}

pub type SharedState = Arc<AppState>;

pub fn build_router(state: SharedState, max_upload_bytes: usize) -> Router {
    // The front-end is served from its own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/api/health", get(handlers::health_check))
        .route("/api/process-documents", post(handlers::process_documents))
        .route("/api/ask-question", post(handlers::ask_question))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(state)
}
