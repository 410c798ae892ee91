use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::{json, Value};
use tokio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pdf_path = std::env::args()
        .nth(1)
        .ok_or("usage: client <file.pdf> [question]")?;
    let question = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "Summarize this document in three sentences.".to_string());

    let client = Client::new();
    let base_url = "http://127.0.0.1:5000";

    println!("🔍 Testing DocuGenius backend");

    // Test health check
    println!("\n📋 Health Check:");
    let health_response = client
        .get(&format!("{}/api/health", base_url))
        .send()
        .await?;

    println!("Status: {}", health_response.status());
    let health_json: Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    // Upload the document
    println!("\n📚 Uploading {}:", pdf_path);
    let bytes = tokio::fs::read(&pdf_path).await?;
    let filename = std::path::Path::new(&pdf_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "document.pdf".to_string());
    let form = Form::new().part("file_0", Part::bytes(bytes).file_name(filename));

    let upload_response = client
        .post(&format!("{}/api/process-documents", base_url))
        .multipart(form)
        .send()
        .await?;

    println!("Status: {}", upload_response.status());
    let upload_json: Value = upload_response.json().await?;
    let document_text = match upload_json["documentText"].as_str() {
        Some(text) => text.to_string(),
        None => {
            println!("Response: {}", serde_json::to_string_pretty(&upload_json)?);
            return Ok(());
        }
    };
    println!("Extracted {} characters", document_text.len());

    // Ask two questions, replaying the history like the front-end does
    let mut chat_history: Vec<Value> = Vec::new();
    for question in [question.as_str(), "What is the single most important point?"] {
        println!("\n🔍 Question: {}", question);
        let ask_payload = json!({
            "question": question,
            "documentText": document_text,
            "chatHistory": chat_history,
        });

        let ask_response = client
            .post(&format!("{}/api/ask-question", base_url))
            .json(&ask_payload)
            .send()
            .await?;

        println!("Status: {}", ask_response.status());
        let ask_json: Value = ask_response.json().await?;
        println!("Response: {}", serde_json::to_string_pretty(&ask_json)?);

        let answer = ask_json["answer"].as_str().unwrap_or_default().to_string();
        chat_history.push(json!({"role": "user", "content": question}));
        chat_history.push(json!({"role": "assistant", "content": answer}));
    }

    println!("\n✅ Client test completed!");
    Ok(())
}
