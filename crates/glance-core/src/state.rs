//! Mutable device snapshot rendered by the watch UI.

use heapless::String;

pub const TIME_BYTES: usize = 12;
pub const DATE_BYTES: usize = 16;
/// Byte budget for the truncated notification line (<= 23 visible chars,
/// UTF-8 encoded).
pub const NOTIFICATION_TEXT_BYTES: usize = 64;
pub const DIRECTION_BYTES: usize = 96;
pub const DISTANCE_BYTES: usize = 16;

/// Navigation icon edge length in pixels.
pub const NAV_ICON_SIDE: usize = 48;
/// 48x48 1bpp bitmap, row-major, MSB-first within each byte.
pub const NAV_ICON_BYTES: usize = NAV_ICON_SIDE * NAV_ICON_SIDE / 8;

/// Active notification and its display window anchor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub active: bool,
    pub text: String<NOTIFICATION_TEXT_BYTES>,
    pub started_at_ms: u64,
}

impl Notification {
    pub const fn new() -> Self {
        Self {
            active: false,
            text: String::new(),
            started_at_ms: 0,
        }
    }

    pub fn clear(&mut self) {
        self.active = false;
        self.text.clear();
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new()
    }
}

/// Latest turn-by-turn snapshot. Direction/distance are replaced on each
/// nav-data event; the icon arrives on an independent event and is merged
/// in place, so icon and text are not atomic with respect to each other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Navigation {
    pub active: bool,
    pub has_icon: bool,
    pub icon: [u8; NAV_ICON_BYTES],
    pub direction: String<DIRECTION_BYTES>,
    pub distance: String<DISTANCE_BYTES>,
}

impl Navigation {
    pub const fn new() -> Self {
        Self {
            active: false,
            has_icon: false,
            icon: [0u8; NAV_ICON_BYTES],
            direction: String::new(),
            distance: String::new(),
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Battery {
    /// Charge level 0..=100.
    pub level: u8,
    pub charging: bool,
}

/// Single process-wide UI snapshot, owned by the main loop. Rebuilt fresh
/// on every power-on and wake; fields stay zero/empty until the first
/// corresponding companion event arrives.
#[derive(Clone, Debug)]
pub struct DeviceState {
    pub time: String<TIME_BYTES>,
    pub date: String<DATE_BYTES>,
    pub notification: Notification,
    pub navigation: Navigation,
    pub battery: Battery,
    pub last_activity_ms: u64,
    pub sleep_enabled: bool,
}

impl DeviceState {
    pub const fn new() -> Self {
        Self {
            time: String::new(),
            date: String::new(),
            notification: Notification::new(),
            navigation: Navigation::new(),
            battery: Battery {
                level: 0,
                charging: false,
            },
            last_activity_ms: 0,
            sleep_enabled: true,
        }
    }

    /// Refreshes the inactivity anchor. `last_activity_ms` never moves
    /// backwards.
    pub fn mark_activity(&mut self, now_ms: u64) {
        self.last_activity_ms = self.last_activity_ms.max(now_ms);
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `src` into `dst`, dropping trailing characters that do not fit.
pub fn assign_truncated<const N: usize>(dst: &mut String<N>, src: &str) {
    dst.clear();
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_anchor_is_monotone() {
        let mut state = DeviceState::new();
        state.mark_activity(500);
        state.mark_activity(200);
        assert_eq!(state.last_activity_ms, 500);
        state.mark_activity(900);
        assert_eq!(state.last_activity_ms, 900);
    }

    #[test]
    fn assign_truncated_bounds_oversized_input() {
        let mut out: String<4> = String::new();
        assign_truncated(&mut out, "abcdef");
        assert_eq!(out.as_str(), "abcd");
        assign_truncated(&mut out, "xy");
        assert_eq!(out.as_str(), "xy");
    }
}
