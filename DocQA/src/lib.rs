pub mod answer_service;
pub mod config;
pub mod conversation_builder;
pub mod document_processor;
pub mod error;
pub mod llm_client;
pub mod models;
pub mod query_service;

pub use answer_service::AnswerService;
pub use config::{Config, LlmConfig};
pub use conversation_builder::build_conversation;
pub use document_processor::{DocumentProcessor, PageParser, PdfExtractParser};
pub use error::{DocQaError, Result};
pub use llm_client::{CompletionBackend, OpenAiClient};
pub use models::*;
pub use query_service::QueryService;
