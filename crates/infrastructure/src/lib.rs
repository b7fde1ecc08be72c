//! Infrastructure layer - Adapters for external systems
//!
//! Implements the gateway ports defined in the application layer over the
//! HR API integration clients, and owns application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{BenefitsAdapter, TimeOffAdapter};
pub use config::{AppConfig, AssistantConfig, Environment, HrApiConfig, ServerConfig};
