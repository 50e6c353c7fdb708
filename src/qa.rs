//! Prompt construction and the single model call behind each answer

use crate::error::Result;
use crate::log_debug;
use crate::ollama::{ChatBackend, ChatMessage};
use crate::util::string::StringUtils;

pub const DEFAULT_MODEL: &str = "mistral";

/// Fill the fixed prompt template with document text and the user question.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "You are a helpful assistant. Use the following PDF content to answer the question.\n\
         \n\
         PDF Content:\n\
         {context}\n\
         \n\
         Question: {question}\n\
         Answer:"
    )
}

/// The first `limit` characters of the joined document text.
pub fn truncate_context(text: &str, limit: usize) -> &str {
    StringUtils::truncate_chars(text, limit)
}

/// Ask `model` about `context`. The caller truncates the context first.
///
/// Sends one user message and returns the reply trimmed of surrounding
/// whitespace. Errors are returned as-is, with no retry.
pub async fn answer_question(
    backend: &dyn ChatBackend,
    model: &str,
    context: &str,
    question: &str,
) -> Result<String> {
    let prompt = build_prompt(context, question);
    log_debug!("Prompt length: {} chars", prompt.chars().count());

    let reply = backend.chat(model, vec![ChatMessage::user(prompt)]).await?;
    Ok(reply.trim().to_string())
}
