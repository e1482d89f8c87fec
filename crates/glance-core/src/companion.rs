//! Companion-link contract consumed by the watch app.
//!
//! The paired phone delivers three asynchronous signals: connection-state
//! changes, notification arrivals, and configuration updates. The app
//! drains them synchronously at the top of every loop iteration, in
//! delivery order. Payloads for `Time`/`NavData`/`NavIcon` updates are
//! pulled through accessors rather than carried in the event itself.

use crate::state::NAV_ICON_BYTES;

/// Configuration-update discriminator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigKind {
    Time,
    Battery,
    NavData,
    NavIcon,
}

/// One drained companion signal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompanionEvent<'a> {
    Connection {
        connected: bool,
    },
    Notification {
        title: &'a str,
        body: &'a str,
    },
    /// For [`ConfigKind::Battery`], `a` is a charging boolean (1/0) and
    /// `b` is the level 0..=100. Other kinds ignore `a`/`b`.
    Config {
        kind: ConfigKind,
        a: u32,
        b: u32,
    },
}

/// Current wall-clock strings held by the companion link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockView<'a> {
    pub time: &'a str,
    pub date: &'a str,
}

/// Current navigation text snapshot held by the companion link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationView<'a> {
    pub active: bool,
    pub direction: &'a str,
    pub distance: &'a str,
}

/// Polled companion provider. Events are observed in delivery order; each
/// is fully applied before the next loop step runs.
pub trait CompanionSource {
    type Error;

    fn poll_event(&mut self) -> Result<Option<CompanionEvent<'_>>, Self::Error>;

    fn clock(&self) -> ClockView<'_>;

    fn navigation(&self) -> NavigationView<'_>;

    fn navigation_icon(&self) -> &[u8; NAV_ICON_BYTES];
}
