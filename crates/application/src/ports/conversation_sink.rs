//! Conversation sink port
//!
//! The dispatcher never touches a UI or a response buffer directly; it
//! appends messages through this interface. A sink is passed per dispatch
//! call so concurrent dispatches never share a reply buffer unless the host
//! wants them to.

use async_trait::async_trait;
use domain::ChatMessage;
#[cfg(test)]
use mockall::automock;

/// Append-only destination for displayed messages
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConversationSink: Send + Sync {
    /// Append a message to the conversation log
    async fn append(&self, message: ChatMessage);
}
