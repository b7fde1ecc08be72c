//! Time-off change notification port
//!
//! Fire-and-forget side channel: after a successful booking the dispatcher
//! signals that time-off data changed so listening views can refresh. No
//! acknowledgement is expected and delivery failures are ignored.

#[cfg(test)]
use mockall::automock;

/// Listener for time-off data changes
#[cfg_attr(test, automock)]
pub trait TimeOffNotifier: Send + Sync {
    /// Signal that time-off data changed
    fn time_off_updated(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TimeOffNotifier) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TimeOffNotifier>();
    }
}
