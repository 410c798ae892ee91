use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use docqa_core::DocQaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_text: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AnswerResponse {
    pub success: bool,
    pub answer: String,
}

pub type ApiFailure<T> = (StatusCode, Json<T>);

pub fn status_for(err: &DocQaError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl ProcessResponse {
    pub fn processed(file_count: usize, document_text: String) -> Self {
        Self {
            success: true,
            message: format!("Successfully processed {} file(s)", file_count),
            document_text: Some(document_text),
        }
    }

    /// The upload body itself was unusable (too large, truncated, ...).
    /// Always a client error, whatever the extractor reported.
    pub fn rejected(status: StatusCode, message: String) -> ApiFailure<Self> {
        let status = if status.is_client_error() {
            status
        } else {
            StatusCode::BAD_REQUEST
        };
        (
            status,
            Json(Self {
                success: false,
                message,
                document_text: None,
            }),
        )
    }

    pub fn failure(err: DocQaError) -> ApiFailure<Self> {
        let status = status_for(&err);
        let message = if err.is_client_error() {
            err.to_string()
        } else {
            format!("Error processing documents: {}", err)
        };
        (
            status,
            Json(Self {
                success: false,
                message,
                document_text: None,
            }),
        )
    }
}

impl AnswerResponse {
    pub fn answered(answer: String) -> Self {
        Self {
            success: true,
            answer,
        }
    }

    pub fn failure(err: DocQaError) -> ApiFailure<Self> {
        let status = status_for(&err);
        let answer = if err.is_client_error() {
            err.to_string()
        } else {
            format!("Error: {}", err)
        };
        (
            status,
            Json(Self {
                success: false,
                answer,
            }),
        )
    }
}

/// Last resort for a handler that panicked: same JSON shape as every
/// other failure, so the client still gets `success: false`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    log::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "success": false,
            "message": format!("Unexpected error: {}", detail),
        })),
    )
        .into_response()
}
