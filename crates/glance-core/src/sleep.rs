//! Inactivity sleep policy and wake bookkeeping.

use log::info;

use crate::state::DeviceState;

/// Idle time before the device suspends.
pub const INACTIVITY_TIMEOUT_MS: u64 = 30_000;
/// Countdown feedback window before the trigger.
pub const SLEEP_COUNTDOWN_WINDOW_MS: u64 = 10_000;
/// Hard timer wake armed alongside the button edge wake.
pub const DEEP_SLEEP_DURATION_US: u64 = 60_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SleepDecision {
    Stay,
    Suspend,
}

/// Wake-source classification. Diagnostic only; no behavioral effect
/// beyond logging.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WakeCause {
    EdgeWake,
    TimerWake,
    Other,
}

impl WakeCause {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EdgeWake => "button",
            Self::TimerWake => "timer",
            Self::Other => "other",
        }
    }
}

/// Conditions that suppress sleep unconditionally.
pub fn suppressed(state: &DeviceState) -> bool {
    state.battery.charging || state.notification.active || state.navigation.active
}

/// One sleep-coordinator pass. Suppression re-arms the activity anchor so
/// the full timeout restarts the moment the suppressing condition clears.
pub fn evaluate(state: &mut DeviceState, now_ms: u64) -> SleepDecision {
    if suppressed(state) {
        state.mark_activity(now_ms);
        return SleepDecision::Stay;
    }

    if state.sleep_enabled
        && now_ms.saturating_sub(state.last_activity_ms) > INACTIVITY_TIMEOUT_MS
    {
        SleepDecision::Suspend
    } else {
        SleepDecision::Stay
    }
}

/// Whole seconds remaining before the sleep trigger, when inside the
/// countdown window. Only meaningful on the Clock screen.
pub fn countdown_seconds(state: &DeviceState, now_ms: u64) -> Option<u8> {
    if !state.sleep_enabled || suppressed(state) {
        return None;
    }

    let deadline = state.last_activity_ms.saturating_add(INACTIVITY_TIMEOUT_MS);
    let remaining = deadline.saturating_sub(now_ms);
    if remaining == 0 || remaining >= SLEEP_COUNTDOWN_WINDOW_MS {
        return None;
    }

    Some((remaining / 1_000) as u8)
}

/// Post-wake reset: the device must not immediately re-sleep, whatever the
/// wake cause was.
pub fn wake_reset(state: &mut DeviceState, cause: WakeCause, now_ms: u64) {
    info!("wake: cause={}", cause.as_str());
    state.last_activity_ms = now_ms;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charging_suppresses_sleep_indefinitely() {
        let mut state = DeviceState::new();
        state.battery.charging = true;

        for now in (0..=60_000).step_by(1_000) {
            assert_eq!(evaluate(&mut state, now), SleepDecision::Stay);
        }
    }

    #[test]
    fn timeout_boundary_is_strict() {
        let mut state = DeviceState::new();
        state.mark_activity(1_000);

        assert_eq!(evaluate(&mut state, 31_000), SleepDecision::Stay);
        assert_eq!(evaluate(&mut state, 31_001), SleepDecision::Suspend);
    }

    #[test]
    fn suppression_restarts_the_full_timeout() {
        let mut state = DeviceState::new();
        state.navigation.active = true;

        // Suppressed passes keep advancing the anchor.
        assert_eq!(evaluate(&mut state, 29_000), SleepDecision::Stay);
        assert_eq!(evaluate(&mut state, 45_000), SleepDecision::Stay);

        state.navigation.active = false;
        assert_eq!(evaluate(&mut state, 75_000), SleepDecision::Stay);
        assert_eq!(evaluate(&mut state, 75_001), SleepDecision::Suspend);
    }

    #[test]
    fn sleep_disabled_never_suspends() {
        let mut state = DeviceState::new();
        state.sleep_enabled = false;

        assert_eq!(evaluate(&mut state, 500_000), SleepDecision::Stay);
    }

    #[test]
    fn countdown_appears_only_in_final_window() {
        let mut state = DeviceState::new();

        assert_eq!(countdown_seconds(&state, 19_999), None);
        assert_eq!(countdown_seconds(&state, 20_001), Some(9));
        assert_eq!(countdown_seconds(&state, 29_500), Some(0));
        assert_eq!(countdown_seconds(&state, 30_000), None);

        state.battery.charging = true;
        assert_eq!(countdown_seconds(&state, 25_000), None);
    }

    #[test]
    fn wake_reset_rearms_the_anchor() {
        let mut state = DeviceState::new();
        wake_reset(&mut state, WakeCause::TimerWake, 12_345);
        assert_eq!(state.last_activity_ms, 12_345);
        assert_eq!(evaluate(&mut state, 42_345), SleepDecision::Stay);
    }
}
