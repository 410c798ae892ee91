use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.filename.to_lowercase().ends_with(".pdf")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One ask-question call. History entries stay raw JSON so a malformed
/// entry can be dropped on its own instead of failing the whole request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chat_history: Vec<serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let history: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(history.unwrap_or_default())
}

// OpenAI-compatible chat completion wire types.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pdf_detection_ignores_case() {
        assert!(UploadedFile::new("report.PDF", vec![]).is_pdf());
        assert!(UploadedFile::new("a.b.pdf", vec![]).is_pdf());
        assert!(!UploadedFile::new("notes.txt", vec![]).is_pdf());
        assert!(!UploadedFile::new("pdf", vec![]).is_pdf());
    }

    #[test]
    fn conversation_request_accepts_camel_case_and_missing_history() {
        let req: ConversationRequest = serde_json::from_value(json!({
            "question": "What?",
            "documentText": "Some text"
        }))
        .unwrap();
        assert_eq!(req.question.as_deref(), Some("What?"));
        assert_eq!(req.document_text.as_deref(), Some("Some text"));
        assert!(req.chat_history.is_empty());
    }

    #[test]
    fn null_history_is_empty() {
        let req: ConversationRequest = serde_json::from_value(json!({
            "question": "q",
            "documentText": "d",
            "chatHistory": null
        }))
        .unwrap();
        assert!(req.chat_history.is_empty());
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::assistant("hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "assistant", "content": "hi"})
        );
    }
}
