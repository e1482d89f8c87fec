//! App-level view models consumed by the board/HAL renderer.

use crate::state::NAV_ICON_BYTES;

/// View model for one frame. Borrowed strings point into [`crate::state`];
/// the renderer never reads device state directly.
pub enum Screen<'a> {
    Clock {
        time: &'a str,
        date: &'a str,
        battery_level: u8,
        charging: bool,
        /// Whole seconds until inactivity sleep, shown in the last window
        /// before the trigger. `None` outside the window or while
        /// suppressed.
        sleep_countdown_s: Option<u8>,
    },
    Notification {
        text: &'a str,
    },
    Navigation {
        direction: &'a str,
        distance: &'a str,
        /// `None` renders text-only; the icon blit must never see unset
        /// bitmap bytes.
        icon: Option<&'a [u8; NAV_ICON_BYTES]>,
    },
    Status {
        line1: &'a str,
        line2: &'a str,
    },
}
