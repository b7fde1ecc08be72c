//! Application state shared across handlers

use std::sync::Arc;

use application::{
    AssistantService,
    ports::{BenefitsPort, TimeOffPort},
};
use infrastructure::AppConfig;
use tokio::sync::broadcast;

use crate::notify::TimeOffEvent;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Dispatcher for chat utterances
    pub assistant: Arc<AssistantService>,
    /// Time-off gateway, for the request-list proxy and readiness checks
    pub timeoff: Arc<dyn TimeOffPort>,
    /// Benefits gateway, for readiness checks
    pub benefits: Arc<dyn BenefitsPort>,
    /// Broadcast channel feeding the SSE event stream
    pub events: broadcast::Sender<TimeOffEvent>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("assistant", &self.assistant)
            .field("event_receivers", &self.events.receiver_count())
            .finish_non_exhaustive()
    }
}
