//! # Hardware Adapters
//!
//! `embedded-hal` 1.0 drivers implementing the `periph` traits. None of
//! them depend on a particular HAL; the firmware binary hands them
//! STM32F4 pins and buses.
//!
//! | Adapter | Trait | Bus |
//! |---------|-------|-----|
//! | `St7735` | `Display` | `mipidsi` SPI interface (SPI + D/C), RST pin |
//! | `Hd44780` | `TextDisplay` | 4-bit parallel |
//! | `Eeprom24x` | `ScoreStore` | I2C |
//! | `Buttons` | `InputPins` | two GPIO inputs |
//! | `PinBuzzer` | `Buzzer` | one GPIO output |
//!
//! Bus errors stop at this layer: the trait methods log them at warn
//! level and return. Only the one-time `init` calls report failure.

pub mod buttons;
pub mod buzzer;
pub mod eeprom;
pub mod hd44780;
pub mod st7735;

pub use buttons::{ActiveLevel, Buttons};
pub use buzzer::PinBuzzer;
pub use eeprom::Eeprom24x;
pub use hd44780::Hd44780;
pub use st7735::St7735;
