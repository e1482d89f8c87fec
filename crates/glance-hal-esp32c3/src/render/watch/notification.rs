use super::*;

pub(super) fn draw_notification(frame: &mut FrameBuffer, text: &str) {
    draw_text(frame, 4, 4, "Notif:", 1, true);
    draw_text_wrapped(
        frame,
        WrappedTextSpec {
            x: 4,
            y: 20,
            text,
            scale: 1,
            max_width: WIDTH - 8,
            line_height: 10,
            max_lines: 4,
        },
        true,
    );
}
