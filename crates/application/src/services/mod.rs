//! Application services - Use case implementations

mod assistant_service;

pub use assistant_service::{AssistantService, DispatchResult};
