use crate::models::{ChatMessage, Role};
use serde_json::Value;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer the user's question based on the provided document text and chat history.";

/// Builds the message list for one completion call:
/// instruction, document context, replayed history, then the question.
pub fn build_conversation(document_text: &str, chat_history: &[Value], question: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(chat_history.len() + 3);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.push(ChatMessage::system(document_context(document_text)));
    messages.extend(chat_history.iter().filter_map(history_message));
    messages.push(ChatMessage::user(question));
    messages
}

fn document_context(document_text: &str) -> String {
    format!("Document Text:\n\n{}\n\n", document_text)
}

// Only user/assistant turns are replayed; anything else is dropped.
fn history_message(entry: &Value) -> Option<ChatMessage> {
    let message: ChatMessage = serde_json::from_value(entry.clone()).ok()?;
    match message.role {
        Role::User | Role::Assistant => Some(message),
        Role::System => None,
    }
}
