//! In-memory framebuffer in SSD1306 page layout.

use core::convert::TryFrom;

use crate::protocol::{BUFFER_SIZE, HEIGHT, PAGE_HEIGHT, PAGES, WIDTH};

/// 1bpp framebuffer in the panel's native page-major layout.
///
/// Byte `page * WIDTH + x` holds the 8-row column strip for that page;
/// bit 0 is the topmost row within the strip.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a new all-dark framebuffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Returns mutable framebuffer bytes.
    pub fn bytes_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.bytes
    }

    /// Clears framebuffer to dark (`on = false`) or lit (`on = true`).
    pub fn clear(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let byte_index = (y / PAGE_HEIGHT) * WIDTH + x;
        let bit_mask = 1u8 << (y % PAGE_HEIGHT);

        if on {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let byte_index = (y / PAGE_HEIGHT) * WIDTH + x;
        let bit_mask = 1u8 << (y % PAGE_HEIGHT);
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Returns a page payload for page 0..=7.
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        if page >= PAGES {
            return None;
        }

        let start = page * WIDTH;
        let end = start + WIDTH;
        <&[u8; WIDTH]>::try_from(&self.bytes[start..end]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_bit_mapping_is_lsb_top_within_page() {
        let mut fb = FrameBuffer::new();

        assert!(fb.set_pixel(0, 0, true));
        assert!(fb.set_pixel(0, 7, true));
        assert!(fb.set_pixel(0, 8, true));

        assert_eq!(fb.page(0).unwrap()[0], 0b1000_0001);
        assert_eq!(fb.page(1).unwrap()[0], 0b0000_0001);
    }

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = FrameBuffer::new();

        assert!(!fb.set_pixel(WIDTH, 0, true));
        assert!(!fb.set_pixel(0, HEIGHT, true));
        assert_eq!(fb.bytes()[0], 0x00);
    }

    #[test]
    fn set_and_read_last_pixel() {
        let mut fb = FrameBuffer::new();

        assert!(fb.set_pixel(WIDTH - 1, HEIGHT - 1, true));
        assert_eq!(fb.pixel(WIDTH - 1, HEIGHT - 1), Some(true));
        assert_eq!(fb.pixel(WIDTH, HEIGHT), None);
    }

    #[test]
    fn clear_resets_every_page() {
        let mut fb = FrameBuffer::new();
        fb.clear(true);
        assert!(fb.bytes().iter().all(|b| *b == 0xFF));
        fb.clear(false);
        assert!(fb.bytes().iter().all(|b| *b == 0x00));
    }
}
