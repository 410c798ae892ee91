mod api_response;
mod handlers;
mod routes;

use docqa_core::{AnswerService, Config, DocumentProcessor, QueryService};
use routes::{build_router, AppState, API_ENDPOINTS};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let answer_service = Arc::new(AnswerService::new(config.llm.clone()));
    if answer_service.is_configured() {
        log::info!(
            "Using model {} at {}",
            answer_service.model(),
            config.llm.api_base
        );
    } else {
        log::warn!("OPENAI_API_KEY is not set; /api/ask-question will answer 400 until it is");
    }

    let mut processor = DocumentProcessor::new();
    if let Some(dir) = &config.upload_tmp_dir {
        processor = processor.with_scratch_dir(dir);
    }

    let state = Arc::new(AppState {
        processor,
        queries: QueryService::new(answer_service),
    });
    let app = build_router(state, config.max_upload_bytes);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    log::info!("DocuGenius backend listening on {}", config.bind_addr);
    for endpoint in ["/"].iter().chain(API_ENDPOINTS.iter()) {
        log::info!("  route {}", endpoint);
    }

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
