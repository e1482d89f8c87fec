//! Application state machine tying companion events, screen selection,
//! and the sleep coordinator together.

use log::{debug, info};

use crate::{
    companion::{CompanionEvent, CompanionSource, ConfigKind},
    render::Screen,
    screen::{self, ScreenKind},
    sleep::{self, SleepDecision, WakeCause},
    state::{DeviceState, NOTIFICATION_TEXT_BYTES, assign_truncated},
    text_policy,
};

/// Clock/date refresh and render cadence.
pub const CLOCK_REFRESH_MS: u64 = 1_000;
/// Cooperative yield between loop iterations.
pub const LOOP_YIELD_MS: u64 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

pub struct WatchApp<CS>
where
    CS: CompanionSource,
{
    source: CS,
    state: DeviceState,
    connected: bool,
    next_clock_refresh_ms: u64,
    pending_redraw: bool,
}

include!("events.rs");
include!("runtime.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
