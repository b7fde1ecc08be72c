//! HTTP presentation layer for the Nestey assistant
//!
//! Hosts the chat endpoint, quick-reply suggestions, the time-off proxy used
//! by the portal's Time Off page, and the SSE event stream that replaces the
//! portal's in-page "timeoff-updated" DOM event.

pub mod error;
pub mod handlers;
pub mod notify;
pub mod routes;
pub mod sink;
pub mod state;

pub use error::ApiError;
pub use notify::{BroadcastNotifier, TimeOffEvent};
pub use routes::create_router;
pub use sink::BufferSink;
pub use state::AppState;
