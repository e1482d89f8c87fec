//! SSD1306 command set and panel geometry.

/// Panel width in pixels.
pub const WIDTH: usize = 128;
/// Panel height in pixels.
pub const HEIGHT: usize = 64;
/// One page covers 8 pixel rows.
pub const PAGE_HEIGHT: usize = 8;
/// Page count for the 128x64 panel.
pub const PAGES: usize = HEIGHT / PAGE_HEIGHT;
/// Full framebuffer size in bytes.
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Default I2C address with SA0 tied low.
pub const I2C_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command stream.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte announcing a data stream.
pub const CONTROL_DATA: u8 = 0x40;

pub const CMD_DISPLAY_OFF: u8 = 0xAE;
pub const CMD_DISPLAY_ON: u8 = 0xAF;
pub const CMD_SET_CONTRAST: u8 = 0x81;
pub const CMD_ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
pub const CMD_NORMAL_DISPLAY: u8 = 0xA6;
pub const CMD_SET_COLUMN_RANGE: u8 = 0x21;
pub const CMD_SET_PAGE_RANGE: u8 = 0x22;

/// Power-on initialization for the 128x64 panel in horizontal addressing
/// mode with the internal charge pump enabled.
pub const INIT_SEQUENCE: [u8; 25] = [
    CMD_DISPLAY_OFF,
    0xD5, 0x80, // display clock divide
    0xA8, 0x3F, // multiplex ratio: 64 rows
    0xD3, 0x00, // display offset
    0x40, // start line 0
    0x8D, 0x14, // charge pump on
    0x20, 0x00, // horizontal addressing
    0xA1, // segment remap
    0xC8, // COM scan direction remapped
    0xDA, 0x12, // COM pins: alternative, no remap
    CMD_SET_CONTRAST, 0xCF,
    0xD9, 0xF1, // pre-charge period
    0xDB, 0x40, // VCOMH deselect level
    CMD_ENTIRE_DISPLAY_RESUME,
    CMD_NORMAL_DISPLAY,
    CMD_DISPLAY_ON,
];

/// Builds the address-window command covering the whole panel.
pub const fn full_window_commands() -> [u8; 6] {
    [
        CMD_SET_COLUMN_RANGE,
        0,
        (WIDTH - 1) as u8,
        CMD_SET_PAGE_RANGE,
        0,
        (PAGES - 1) as u8,
    ]
}
