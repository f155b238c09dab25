//! 24xx-series I2C EEPROM holding the high score as a little-endian `i16`.

use embedded_hal::i2c::I2c;

use crate::config::SCORE_ADDR;
use crate::periph::ScoreStore;

/// 7-bit bus address with A0..A2 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x50;

pub struct Eeprom24x<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Eeprom24x<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn read_word(&mut self, mem: u16) -> Result<i16, I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &mem.to_be_bytes(), &mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    /// Both bytes go out in one page write. The part is busy for a few
    /// milliseconds afterwards and NAKs until done.
    pub fn write_word(&mut self, mem: u16, value: i16) -> Result<(), I2C::Error> {
        let [hi, lo] = mem.to_be_bytes();
        let [v0, v1] = value.to_le_bytes();
        self.i2c.write(self.address, &[hi, lo, v0, v1])
    }
}

impl<I2C: I2c> ScoreStore for Eeprom24x<I2C> {
    fn read_score(&mut self) -> i32 {
        match self.read_word(SCORE_ADDR) {
            Ok(v) => v as i32,
            Err(_) => {
                warn!("eeprom: read failed, best score 0");
                0
            }
        }
    }

    fn write_score(&mut self, score: i32) {
        let value = score.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        if self.write_word(SCORE_ADDR, value).is_err() {
            warn!("eeprom: write of {} failed", value);
        }
    }
}
