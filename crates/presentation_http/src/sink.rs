//! Per-request reply buffer
//!
//! The dispatcher appends replies through the `ConversationSink` port; the
//! chat handler drains the buffer into the HTTP response. One buffer per
//! request keeps concurrent dispatches from interleaving replies.

use application::ports::ConversationSink;
use async_trait::async_trait;
use domain::ChatMessage;
use tokio::sync::Mutex;

/// A sink that collects messages in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Mutex<Vec<ChatMessage>>,
}

#[async_trait]
impl ConversationSink for BufferSink {
    async fn append(&self, message: ChatMessage) {
        self.messages.lock().await.push(message);
    }
}

impl BufferSink {
    /// Consume the sink, returning the collected messages in append order
    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collects_messages_in_order() {
        let sink = BufferSink::default();
        sink.append(ChatMessage::assistant("first")).await;
        sink.append(ChatMessage::assistant("second")).await;

        let contents: Vec<String> = sink
            .into_messages()
            .into_iter()
            .map(|m| m.content)
            .collect();
        assert_eq!(contents, vec!["first".to_string(), "second".to_string()]);
    }
}
