//! HD44780 character LCD in 4-bit mode, write-only (R/W tied low).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::periph::TextDisplay;

const CLEAR: u8 = 0x01;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_ON: u8 = 0x0C;
const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
const SET_DDRAM_ADDR: u8 = 0x80;

/// DDRAM address of the first column of each row.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

const POWER_ON_DELAY_MS: u32 = 50;
const CLEAR_DELAY_US: u32 = 2_000;
const COMMAND_DELAY_US: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdError;

/// `data` is D4..D7 in that order.
pub struct Hd44780<RS, EN, D, DELAY> {
    rs: RS,
    en: EN,
    data: [D; 4],
    delay: DELAY,
}

impl<RS, EN, D, DELAY> Hd44780<RS, EN, D, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(rs: RS, en: EN, data: [D; 4], delay: DELAY) -> Self {
        Self { rs, en, data, delay }
    }

    /// Reset-by-instruction into 4-bit, two-line mode, then clear.
    pub fn init(&mut self) -> Result<(), LcdError> {
        self.delay.delay_ms(POWER_ON_DELAY_MS);
        self.rs.set_low().map_err(|_| LcdError)?;
        for _ in 0..3 {
            self.write_nibble(0x3)?;
            self.delay.delay_us(4_500);
        }
        self.write_nibble(0x2)?;
        self.delay.delay_us(COMMAND_DELAY_US);

        self.command(FUNCTION_SET_4BIT_2LINE)?;
        self.command(DISPLAY_ON)?;
        self.command(ENTRY_MODE_INCREMENT)?;
        self.try_clear()?;
        info!("hd44780: ready");
        Ok(())
    }

    pub fn try_clear(&mut self) -> Result<(), LcdError> {
        self.command(CLEAR)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    pub fn try_goto(&mut self, row: u8, col: u8) -> Result<(), LcdError> {
        let base = ROW_OFFSETS[(row as usize).min(ROW_OFFSETS.len() - 1)];
        self.command(SET_DDRAM_ADDR | (base + (col & 0x3F)))
    }

    pub fn try_write_char(&mut self, c: u8) -> Result<(), LcdError> {
        self.rs.set_high().map_err(|_| LcdError)?;
        self.write_byte(c)
    }

    fn command(&mut self, byte: u8) -> Result<(), LcdError> {
        self.rs.set_low().map_err(|_| LcdError)?;
        self.write_byte(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), LcdError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), LcdError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(((nibble >> bit) & 1 != 0).into()).map_err(|_| LcdError)?;
        }
        self.en.set_high().map_err(|_| LcdError)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(|_| LcdError)?;
        Ok(())
    }
}

impl<RS, EN, D, DELAY> TextDisplay for Hd44780<RS, EN, D, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D: OutputPin,
    DELAY: DelayNs,
{
    fn clear(&mut self) {
        if self.try_clear().is_err() {
            warn!("hd44780: clear failed");
        }
    }

    fn goto(&mut self, row: u8, col: u8) {
        if self.try_goto(row, col).is_err() {
            warn!("hd44780: goto failed");
        }
    }

    fn write_char(&mut self, c: u8) {
        if self.try_write_char(c).is_err() {
            warn!("hd44780: write failed");
        }
    }
}
