use embedded_hal::i2c::I2c;
use ssd1306::{DriverResult, FrameBuffer, Ssd1306};

const BOOT_CONTRAST: u8 = 0x8F;

/// Board-level display adapter for the 128x64 OLED panel.
#[derive(Debug)]
pub struct WatchDisplay<I2C> {
    driver: Ssd1306<I2C>,
}

impl<I2C> WatchDisplay<I2C>
where
    I2C: I2c,
{
    pub const fn new(i2c: I2C) -> Self {
        Self {
            driver: Ssd1306::new(i2c),
        }
    }

    /// Runs the panel init sequence and blanks RAM. The init sequence
    /// leaves output enabled.
    pub fn initialize(&mut self) -> DriverResult<I2C::Error> {
        self.driver.initialize()?;
        self.driver.set_contrast(BOOT_CONTRAST)?;
        self.driver.clear_all()
    }

    pub fn flush_frame(&mut self, frame: &FrameBuffer) -> DriverResult<I2C::Error> {
        self.driver.flush_full(frame)
    }

    pub fn clear_all(&mut self) -> DriverResult<I2C::Error> {
        self.driver.clear_all()
    }

    /// Panel output off ahead of deep sleep. RAM is retained but the
    /// charge pump stops drawing.
    pub fn power_off(&mut self) -> DriverResult<I2C::Error> {
        self.driver.display_off()
    }
}
