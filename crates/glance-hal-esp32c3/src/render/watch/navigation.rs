use super::*;

const ICON_X: usize = 0;
const ICON_Y: usize = 16;
const TEXT_BESIDE_ICON_X: usize = 52;
const TEXT_ONLY_X: usize = 4;
const DIRECTION_Y: usize = 18;
const DIRECTION_LINE_STEP: usize = 10;
const DISTANCE_Y: usize = 44;

pub(super) fn draw_navigation(
    frame: &mut FrameBuffer,
    direction: &str,
    distance: &str,
    icon: Option<&[u8; NAV_ICON_BYTES]>,
) {
    let text_x = match icon {
        Some(bytes) => {
            blit_icon(frame, ICON_X, ICON_Y, bytes);
            TEXT_BESIDE_ICON_X
        }
        None => TEXT_ONLY_X,
    };
    let budget = WIDTH - text_x;

    if text_pixel_width(direction, 1) <= budget {
        draw_text(frame, text_x, DIRECTION_Y + DIRECTION_LINE_STEP / 2, direction, 1, true);
    } else {
        let (first, second) = text_policy::split_direction(direction);
        draw_text(frame, text_x, DIRECTION_Y, first, 1, true);
        if let Some(second) = second {
            draw_text(frame, text_x, DIRECTION_Y + DIRECTION_LINE_STEP, second, 1, true);
        }
    }

    draw_text(frame, text_x, DISTANCE_Y, distance, 2, true);
}

/// Blits the 48x48 1bpp icon. Row-major, MSB-first within each byte.
fn blit_icon(frame: &mut FrameBuffer, x0: usize, y0: usize, bytes: &[u8; NAV_ICON_BYTES]) {
    for y in 0..NAV_ICON_SIDE {
        for x in 0..NAV_ICON_SIDE {
            let bit = y * NAV_ICON_SIDE + x;
            let mask = 0x80u8 >> (bit % 8);
            if bytes[bit / 8] & mask != 0 {
                set_pixel(frame, x0 + x, y0 + y, true);
            }
        }
    }
}
