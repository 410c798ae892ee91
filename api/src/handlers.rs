use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    Json,
};
use docqa_core::{ConversationRequest, DocQaError, UploadedFile};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api_response::{AnswerResponse, ApiFailure, ProcessResponse};
use crate::routes::{SharedState, API_ENDPOINTS};

pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "DocuGenius Backend is running!",
        "status": "healthy",
        "endpoints": API_ENDPOINTS,
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn process_documents(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>, ApiFailure<ProcessResponse>> {
    let request_id = Uuid::new_v4();

    let Ok(multipart) = multipart else {
        log::warn!("[{}] upload without a multipart body", request_id);
        return Err(ProcessResponse::failure(DocQaError::NoFiles));
    };

    let files = read_uploads(multipart).await.map_err(|e| {
        log::warn!("[{}] failed to read upload: {}", request_id, e.body_text());
        ProcessResponse::rejected(e.status(), e.body_text())
    })?;

    if files.is_empty() {
        return Err(ProcessResponse::failure(DocQaError::NoFiles));
    }

    let file_count = files.len();
    log::info!("[{}] processing {} uploaded file(s)", request_id, file_count);

    match state.processor.process_documents(files).await {
        Ok(document_text) => {
            log::info!(
                "[{}] extracted {} chars of text",
                request_id,
                document_text.len()
            );
            Ok(Json(ProcessResponse::processed(file_count, document_text)))
        }
        Err(e) => {
            log::warn!("[{}] {}", request_id, e);
            Err(ProcessResponse::failure(e))
        }
    }
}

/// Every part with a filename is an upload, whatever its field name.
async fn read_uploads(mut multipart: Multipart) -> Result<Vec<UploadedFile>, MultipartError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        files.push(UploadedFile::new(filename, bytes.to_vec()));
    }

    Ok(files)
}

pub async fn ask_question(
    State(state): State<SharedState>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiFailure<AnswerResponse>> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        log::warn!("[{}] rejected ask-question body: {}", request_id, rejection);
        AnswerResponse::failure(DocQaError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    })?;

    match state.queries.ask(&request).await {
        Ok(answer) => {
            log::info!("[{}] answered ({} chars)", request_id, answer.len());
            Ok(Json(AnswerResponse::answered(answer)))
        }
        Err(e) => {
            if e.is_client_error() {
                log::warn!("[{}] {}", request_id, e);
            } else {
                log::error!("[{}] Error in ask_question: {}", request_id, e);
            }
            Err(AnswerResponse::failure(e))
        }
    }
}
