#![cfg_attr(not(test), no_std)]

//! SSD1306 (128x64 monochrome OLED, I2C) driver primitives.

mod framebuffer;
pub mod protocol;

pub use framebuffer::FrameBuffer;

use embedded_hal::i2c::I2c;

use crate::protocol::{CONTROL_COMMAND, CONTROL_DATA, PAGES, WIDTH};

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<BusErr> {
    /// I2C transaction failed.
    Bus(BusErr),
}

pub type DriverResult<BusErr> = Result<(), Error<BusErr>>;

/// SSD1306 driver over a blocking I2C bus.
#[derive(Debug)]
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Creates a new driver instance at the default address.
    pub const fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: protocol::I2C_ADDRESS,
        }
    }

    /// Creates a driver at an explicit I2C address (SA0 high boards).
    pub const fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Releases the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Runs the power-on initialization sequence.
    pub fn initialize(&mut self) -> DriverResult<I2C::Error> {
        for cmd in protocol::INIT_SEQUENCE {
            self.command(cmd)?;
        }
        Ok(())
    }

    /// Sends one command byte.
    pub fn command(&mut self, cmd: u8) -> DriverResult<I2C::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(Error::Bus)
    }

    /// Turns the panel output on.
    pub fn display_on(&mut self) -> DriverResult<I2C::Error> {
        self.command(protocol::CMD_DISPLAY_ON)
    }

    /// Turns the panel output off. RAM contents are retained.
    pub fn display_off(&mut self) -> DriverResult<I2C::Error> {
        self.command(protocol::CMD_DISPLAY_OFF)
    }

    /// Sets output contrast (0 dimmest, 255 brightest).
    pub fn set_contrast(&mut self, contrast: u8) -> DriverResult<I2C::Error> {
        self.command(protocol::CMD_SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Writes a full framebuffer, one page per data transaction.
    pub fn flush_full(&mut self, frame: &FrameBuffer) -> DriverResult<I2C::Error> {
        self.set_full_window()?;

        let mut packet = [0u8; WIDTH + 1];
        packet[0] = CONTROL_DATA;

        for page in 0..PAGES {
            // page() is total for 0..PAGES.
            let Some(data) = frame.page(page) else {
                continue;
            };
            packet[1..].copy_from_slice(data);
            self.i2c.write(self.address, &packet).map_err(Error::Bus)?;
        }

        Ok(())
    }

    /// Blanks the panel RAM.
    pub fn clear_all(&mut self) -> DriverResult<I2C::Error> {
        self.flush_full(&FrameBuffer::new())
    }

    fn set_full_window(&mut self) -> DriverResult<I2C::Error> {
        for cmd in protocol::full_window_commands() {
            self.command(cmd)?;
        }
        Ok(())
    }
}
