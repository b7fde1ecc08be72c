//! Port definitions - interfaces the application layer depends on
//!
//! Adapters in the infrastructure layer implement the gateway ports; the
//! presentation layer implements the conversation sink and notifier.

mod balance_port;
mod benefits_port;
mod conversation_sink;
mod notifier;
mod timeoff_port;

#[cfg(test)]
pub use balance_port::MockBalancePort;
pub use balance_port::{BalancePort, BalanceSummary, LeaveBalance};
#[cfg(test)]
pub use benefits_port::MockBenefitsPort;
pub use benefits_port::{BenefitRecord, BenefitsPort, BenefitsSummary, BenefitsTotals};
#[cfg(test)]
pub use conversation_sink::MockConversationSink;
pub use conversation_sink::ConversationSink;
#[cfg(test)]
pub use notifier::MockTimeOffNotifier;
pub use notifier::TimeOffNotifier;
#[cfg(test)]
pub use timeoff_port::MockTimeOffPort;
pub use timeoff_port::{BookingConfirmation, TimeOffPort, TimeOffRequestRecord};
