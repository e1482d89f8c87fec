//! Screen selection: exactly one screen variant is active per instant.

use crate::state::DeviceState;

/// How long a notification owns the screen after arrival.
pub const NOTIFICATION_DISPLAY_MS: u64 = 1_500;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenKind {
    Notification,
    Navigation,
    Clock,
}

/// Tie-break order for screen selection; first match wins. The order is a
/// policy, not an accident: notifications preempt navigation, navigation
/// preempts the clock.
pub const SCREEN_PRIORITY: [ScreenKind; 3] = [
    ScreenKind::Notification,
    ScreenKind::Navigation,
    ScreenKind::Clock,
];

impl ScreenKind {
    /// Whether this variant claims the screen for the given state.
    fn wants(self, state: &DeviceState, now_ms: u64) -> bool {
        match self {
            Self::Notification => {
                state.notification.active
                    && now_ms.saturating_sub(state.notification.started_at_ms)
                        < NOTIFICATION_DISPLAY_MS
            }
            Self::Navigation => state.navigation.active,
            Self::Clock => true,
        }
    }
}

/// Pure selector over [`SCREEN_PRIORITY`]. Never mutates state; expiring
/// the notification flag once its window passes is the caller's job.
pub fn select_screen(state: &DeviceState, now_ms: u64) -> ScreenKind {
    SCREEN_PRIORITY
        .iter()
        .copied()
        .find(|kind| kind.wants(state, now_ms))
        .unwrap_or(ScreenKind::Clock)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(notification: bool, navigation: bool) -> DeviceState {
        let mut state = DeviceState::new();
        if notification {
            state.notification.active = true;
            state.notification.started_at_ms = 1_000;
        }
        state.navigation.active = navigation;
        state
    }

    #[test]
    fn notification_wins_over_navigation_within_window() {
        let state = state_with(true, true);
        assert_eq!(select_screen(&state, 1_000), ScreenKind::Notification);
        assert_eq!(select_screen(&state, 2_499), ScreenKind::Notification);
    }

    #[test]
    fn notification_loses_screen_at_window_edge() {
        let state = state_with(true, true);
        assert_eq!(select_screen(&state, 2_500), ScreenKind::Navigation);
    }

    #[test]
    fn inactive_notification_is_never_selected() {
        let mut state = state_with(false, true);
        assert_eq!(select_screen(&state, 1_000), ScreenKind::Navigation);
        state.navigation.active = false;
        assert_eq!(select_screen(&state, 1_000), ScreenKind::Clock);
    }

    #[test]
    fn clock_is_the_total_fallback() {
        let state = DeviceState::new();
        assert_eq!(select_screen(&state, 0), ScreenKind::Clock);
        assert_eq!(select_screen(&state, u64::MAX), ScreenKind::Clock);
    }
}
