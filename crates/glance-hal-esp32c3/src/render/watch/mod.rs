mod clock;
mod glyph;
mod navigation;
mod notification;
mod primitives;
mod status;
mod text;

use glance_core::render::Screen;
use glance_core::state::{NAV_ICON_BYTES, NAV_ICON_SIDE};
use glance_core::text_policy;
use ssd1306::{
    FrameBuffer,
    protocol::{HEIGHT, WIDTH},
};

use super::FrameRenderer;

use glyph::*;
use primitives::*;
use text::*;

/// Renderer for the clock, notification, navigation, and status screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct WatchRenderer;

impl WatchRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl FrameRenderer for WatchRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer) {
        frame.clear(false);

        match screen {
            Screen::Clock {
                time,
                date,
                battery_level,
                charging,
                sleep_countdown_s,
            } => clock::draw_clock(frame, time, date, battery_level, charging, sleep_countdown_s),
            Screen::Notification { text } => notification::draw_notification(frame, text),
            Screen::Navigation {
                direction,
                distance,
                icon,
            } => navigation::draw_navigation(frame, direction, distance, icon),
            Screen::Status { line1, line2 } => status::draw_status(frame, line1, line2),
        }
    }
}
