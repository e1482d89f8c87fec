use super::*;

const DATE_X: usize = 4;
const DATE_Y: usize = 2;
const TIME_X: usize = 4;
const TIME_Y: usize = 18;
const TIME_SCALE: usize = 3;

const GAUGE_X: usize = 100;
const GAUGE_Y: usize = 52;
const GAUGE_W: usize = 20;
const GAUGE_H: usize = 8;
const GAUGE_FILL_MAX: usize = 16;

const COUNTDOWN_X: usize = 4;
const COUNTDOWN_Y: usize = 54;

pub(super) fn draw_clock(
    frame: &mut FrameBuffer,
    time: &str,
    date: &str,
    battery_level: u8,
    charging: bool,
    sleep_countdown_s: Option<u8>,
) {
    draw_text(frame, DATE_X, DATE_Y, date, 1, true);
    draw_text(frame, TIME_X, TIME_Y, time, TIME_SCALE, true);
    draw_battery_gauge(frame, battery_level, charging);

    if let Some(seconds) = sleep_countdown_s {
        draw_sleep_countdown(frame, seconds);
    }
}

fn draw_battery_gauge(frame: &mut FrameBuffer, level: u8, charging: bool) {
    draw_rect(frame, GAUGE_X, GAUGE_Y, GAUGE_W, GAUGE_H, true);
    // Terminal nub on the right edge.
    draw_filled_rect(frame, GAUGE_X + GAUGE_W, GAUGE_Y + 2, 2, GAUGE_H - 4, true);

    let fill = (level.min(100) as usize * GAUGE_FILL_MAX) / 100;
    if fill > 0 {
        draw_filled_rect(frame, GAUGE_X + 2, GAUGE_Y + 2, fill, GAUGE_H - 4, true);
    }

    if charging {
        draw_text(frame, GAUGE_X.saturating_sub(8), GAUGE_Y, "+", 1, true);
    }
}

fn draw_sleep_countdown(frame: &mut FrameBuffer, seconds: u8) {
    let mut buf = [0u8; 16];
    let prefix = b"Sleep in ";
    buf[..prefix.len()].copy_from_slice(prefix);

    let mut len = prefix.len();
    len += write_u16_ascii(seconds as u16, &mut buf[len..]);
    if len < buf.len() {
        buf[len] = b's';
        len += 1;
    }

    if let Ok(line) = core::str::from_utf8(&buf[..len]) {
        draw_text(frame, COUNTDOWN_X, COUNTDOWN_Y, line, 1, true);
    }
}
