use crate::answer_service::AnswerService;
use crate::conversation_builder::build_conversation;
use crate::error::{DocQaError, Result};
use crate::models::ConversationRequest;
use std::sync::Arc;

pub struct QueryService {
    answer_service: Arc<AnswerService>,
}

impl QueryService {
    pub fn new(answer_service: Arc<AnswerService>) -> Self {
        Self { answer_service }
    }

    pub async fn ask(&self, request: &ConversationRequest) -> Result<String> {
        let question = non_empty(request.question.as_deref())
            .ok_or_else(|| DocQaError::Validation("No question provided".to_string()))?;

        let document_text = non_empty(request.document_text.as_deref()).ok_or_else(|| {
            DocQaError::Validation(
                "No document text available. Please upload a document first.".to_string(),
            )
        })?;

        let messages = build_conversation(document_text, &request.chat_history, question);
        log::info!(
            "Answering question ({} chars of document, {} history entries)",
            document_text.len(),
            request.chat_history.len()
        );

        self.answer_service.answer(messages).await
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
