//! Backend reachability tracking for the connection chip.

use std::time::Duration;

/// How long the disconnect notification stays up unless dismissed earlier.
pub const NOTIFICATION_AUTO_HIDE: Duration = Duration::from_millis(6000);

/// What the last probe said about the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn label(self) -> Option<&'static str> {
        match self {
            ConnectionState::Unknown => None,
            ConnectionState::Connected => Some("Connected to Backend"),
            ConnectionState::Disconnected => Some("Backend Disconnected"),
        }
    }
}

/// Probe outcomes folded into a state plus a one-shot notification.
///
/// The notification fires on the transition into `Disconnected` only, so a
/// backend that stays down does not re-notify on every tick. A successful
/// probe re-arms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionTracker {
    state: ConnectionState,
    notification_open: bool,
    probing: bool,
}

impl ConnectionTracker {
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn notification_open(&self) -> bool {
        self.notification_open && self.state == ConnectionState::Disconnected
    }

    /// Claim the next probe. False while an earlier one is still running,
    /// in which case the tick is skipped.
    pub fn begin_probe(&mut self) -> bool {
        if self.probing {
            return false;
        }
        self.probing = true;
        true
    }

    pub fn finish_probe(&mut self) {
        self.probing = false;
    }

    pub fn is_probing(&self) -> bool {
        self.probing
    }

    pub fn record_success(&mut self) {
        self.state = ConnectionState::Connected;
        self.notification_open = false;
    }

    /// Returns true when this failure raised the notification.
    pub fn record_failure(&mut self) -> bool {
        let newly_down = self.state != ConnectionState::Disconnected;
        self.state = ConnectionState::Disconnected;
        if newly_down {
            self.notification_open = true;
        }
        newly_down
    }

    pub fn dismiss(&mut self) {
        self.notification_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown_and_silent() {
        let tracker = ConnectionTracker::default();
        assert_eq!(tracker.state(), ConnectionState::Unknown);
        assert_eq!(tracker.state().label(), None);
        assert!(!tracker.notification_open());
    }

    #[test]
    fn test_first_failure_notifies_once() {
        let mut tracker = ConnectionTracker::default();
        assert!(tracker.record_failure());
        assert!(tracker.notification_open());

        tracker.dismiss();
        assert!(!tracker.record_failure());
        assert!(!tracker.notification_open());
        assert_eq!(tracker.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_success_rearms_notification() {
        let mut tracker = ConnectionTracker::default();
        tracker.record_failure();
        tracker.record_success();
        assert_eq!(tracker.state(), ConnectionState::Connected);
        assert!(!tracker.notification_open());

        assert!(tracker.record_failure());
        assert!(tracker.notification_open());
    }

    #[test]
    fn test_tick_skipped_while_check_in_flight() {
        let mut tracker = ConnectionTracker::default();
        assert!(tracker.begin_probe());
        assert!(tracker.is_probing());
        assert!(!tracker.begin_probe());

        tracker.record_failure();
        assert!(!tracker.begin_probe());

        tracker.finish_probe();
        assert!(!tracker.is_probing());
        assert!(tracker.begin_probe());
    }

    #[test]
    fn test_auto_hide_closes_notification_only() {
        let mut tracker = ConnectionTracker::default();
        assert!(tracker.record_failure());
        // What the auto-hide timer does when it fires.
        tracker.dismiss();
        assert!(!tracker.notification_open());
        assert_eq!(tracker.state(), ConnectionState::Disconnected);
        assert_eq!(NOTIFICATION_AUTO_HIDE, Duration::from_secs(6));
    }

    #[test]
    fn test_connected_stays_quiet() {
        let mut tracker = ConnectionTracker::default();
        tracker.record_success();
        tracker.record_success();
        assert_eq!(tracker.state().label(), Some("Connected to Backend"));
        assert!(!tracker.notification_open());
    }
}
