//! Time-off change notifications
//!
//! The portal used to dispatch a `timeoff-updated` DOM event so the Time Off
//! page could refresh after a chat booking. Server-side, that becomes a
//! broadcast channel drained by the SSE endpoint. Delivery is fire-and-forget:
//! a send with no subscribers is not an error.

use application::ports::TimeOffNotifier;
use serde::Serialize;
use tokio::sync::broadcast;

/// Event published when time-off data changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum TimeOffEvent {
    /// A time-off request was created; listing views should refresh
    #[serde(rename = "timeoff-updated")]
    TimeOffUpdated,
}

/// Notifier publishing to a broadcast channel
#[derive(Debug)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<TimeOffEvent>,
}

impl BroadcastNotifier {
    /// Create a notifier over an existing channel
    pub const fn new(sender: broadcast::Sender<TimeOffEvent>) -> Self {
        Self { sender }
    }
}

impl TimeOffNotifier for BroadcastNotifier {
    fn time_off_updated(&self) {
        // A send error only means nobody is subscribed right now
        let _ = self.sender.send(TimeOffEvent::TimeOffUpdated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_portal_event_name() {
        let json = serde_json::to_string(&TimeOffEvent::TimeOffUpdated).unwrap();
        assert_eq!(json, r#"{"event":"timeoff-updated"}"#);
    }

    #[tokio::test]
    async fn notifier_reaches_subscribers() {
        let (sender, mut receiver) = broadcast::channel(4);
        let notifier = BroadcastNotifier::new(sender);

        notifier.time_off_updated();
        assert_eq!(receiver.recv().await.unwrap(), TimeOffEvent::TimeOffUpdated);
    }

    #[test]
    fn notifier_without_subscribers_does_not_panic() {
        let (sender, _) = broadcast::channel(4);
        let notifier = BroadcastNotifier::new(sender);
        notifier.time_off_updated();
    }
}
