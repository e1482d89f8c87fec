use super::*;

pub(super) fn draw_text(
    frame: &mut FrameBuffer,
    x: usize,
    y: usize,
    text: &str,
    scale: usize,
    on: bool,
) {
    let mut cursor_x = x;

    for c in text.chars() {
        let glyph = glyph_5x7(normalize_glyph_char(c));
        draw_glyph_5x7(frame, cursor_x, y, &glyph, scale, on);
        cursor_x += 6 * scale;
    }
}

pub(super) fn draw_text_centered(
    frame: &mut FrameBuffer,
    y: usize,
    text: &str,
    scale: usize,
    on: bool,
) {
    let width = text_pixel_width(text, scale);
    let x = WIDTH.saturating_sub(width) / 2;
    draw_text(frame, x, y, text, scale, on);
}

pub(super) fn text_pixel_width(text: &str, scale: usize) -> usize {
    let chars = text.chars().count();
    if chars == 0 {
        0
    } else {
        chars * (6 * scale) - scale
    }
}

pub(super) struct WrappedTextSpec<'a> {
    pub(super) x: usize,
    pub(super) y: usize,
    pub(super) text: &'a str,
    pub(super) scale: usize,
    pub(super) max_width: usize,
    pub(super) line_height: usize,
    pub(super) max_lines: usize,
}

/// Draws text wrapping to new lines within the pixel budget. Lines past
/// `max_lines` are dropped.
pub(super) fn draw_text_wrapped(frame: &mut FrameBuffer, spec: WrappedTextSpec<'_>, on: bool) {
    let per_line = (spec.max_width + spec.scale) / (6 * spec.scale);
    if per_line == 0 {
        return;
    }

    let mut line = 0usize;
    let mut col = 0usize;
    let mut cursor_x = spec.x;
    let mut cursor_y = spec.y;

    for c in spec.text.chars() {
        if col == per_line {
            line += 1;
            if line == spec.max_lines {
                return;
            }
            col = 0;
            cursor_x = spec.x;
            cursor_y += spec.line_height;
        }

        let glyph = glyph_5x7(normalize_glyph_char(c));
        draw_glyph_5x7(frame, cursor_x, cursor_y, &glyph, spec.scale, on);
        cursor_x += 6 * spec.scale;
        col += 1;
    }
}

pub(super) fn write_u16_ascii(mut value: u16, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 5];
    let mut tmp_len = 0usize;
    while value > 0 {
        if tmp_len >= tmp.len() {
            break;
        }
        tmp[tmp_len] = b'0' + (value % 10) as u8;
        tmp_len += 1;
        value /= 10;
    }

    let len = core::cmp::min(tmp_len, out.len());
    for i in 0..len {
        out[i] = tmp[tmp_len - 1 - i];
    }

    len
}
