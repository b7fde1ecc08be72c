//! Chat handler

use application::ConversationSink;
use axum::{Json, extract::State};
use chrono::Local;
use domain::{ChatMessage, Intent};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, sink::BufferSink, state::AppState};

/// Chat request body
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    /// User utterance
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Intent the utterance was classified as
    pub intent: Intent,
    /// Assistant replies, in emission order
    pub replies: Vec<String>,
    /// Dispatch latency in milliseconds
    pub latency_ms: u64,
}

/// Handle a chat request
///
/// Dispatches the utterance against a per-request buffer sink; the collected
/// assistant replies become the response body.
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let sink = BufferSink::default();
    sink.append(ChatMessage::user(request.message.clone())).await;

    // The only place the real clock enters the dispatch path
    let today = Local::now().date_naive();
    let result = state.assistant.dispatch(&request.message, today, &sink).await;

    let replies = sink
        .into_messages()
        .into_iter()
        .filter(|m| m.role == domain::MessageRole::Assistant)
        .map(|m| m.content)
        .collect();

    Ok(Json(ChatResponse {
        intent: result.intent,
        replies,
        latency_ms: result.execution_time_ms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserialize() {
        let json = r#"{"message": "What's my PTO balance?"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "What's my PTO balance?");
    }

    #[test]
    fn overlong_message_fails_validation() {
        let request = ChatRequest {
            message: "x".repeat(2001),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn chat_response_serializes_intent_name() {
        let response = ChatResponse {
            intent: Intent::PtoBalance,
            replies: vec!["Let me check your balance...".to_string()],
            latency_ms: 3,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""intent":"pto_balance""#));
    }
}
