use super::*;

pub(super) fn draw_status(frame: &mut FrameBuffer, line1: &str, line2: &str) {
    draw_text_centered(frame, HEIGHT / 2 - 12, line1, 2, true);
    draw_text_centered(frame, HEIGHT / 2 + 12, line2, 1, true);
}
