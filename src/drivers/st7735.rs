//! ST7735 TFT panel through `mipidsi`.
//!
//! `mipidsi` owns the controller protocol (reset, init sequence, address
//! window, RAMWR). This adapter maps the game's window/fill pairs onto
//! `set_pixels` and turns RGB565 words into `Rgb565` pixels.

use core::iter;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use mipidsi::dcs::{InterfaceExt, SetInvertMode};
use mipidsi::interface::Interface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorInversion, Orientation};
use mipidsi::Builder;

use crate::config::{SCREEN_MAX, SCREEN_MIN};
use crate::periph::Display;

/// Square drawing area addressed by the game, in pixels.
pub const PANEL_SIZE: u16 = (SCREEN_MAX - SCREEN_MIN) as u16 + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Controller reset or init sequence failed.
    Init,
    /// Bus error while drawing.
    Interface,
}

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u8,
    pub y0: u8,
    pub x1: u8,
    pub y1: u8,
}

impl Window {
    pub const fn new(x0: u8, y0: u8, x1: u8, y1: u8) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Pixel count; zero for an inverted rectangle.
    pub fn area(&self) -> usize {
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return 0;
        }
        (self.x1 - self.x0 + 1) as usize * (self.y1 - self.y0 + 1) as usize
    }
}

pub struct St7735<DI, RST>
where
    DI: Interface<Word = u8>,
    RST: OutputPin,
{
    display: mipidsi::Display<DI, ST7735s, RST>,
    /// Window announced by the last `set_write_window`.
    window: Option<Window>,
}

impl<DI, RST> St7735<DI, RST>
where
    DI: Interface<Word = u8>,
    RST: OutputPin,
{
    /// Hardware reset, controller init, rows flipped to match the panel's
    /// mounting.
    pub fn init(di: DI, rst: RST, delay: &mut impl DelayNs) -> Result<Self, DisplayError> {
        let display = Builder::new(ST7735s, di)
            .reset_pin(rst)
            .display_size(PANEL_SIZE, PANEL_SIZE)
            .orientation(Orientation::new().flip_vertical())
            .invert_colors(ColorInversion::Normal)
            .init(delay)
            .map_err(|_| DisplayError::Init)?;
        info!("st7735: ready, {}x{}", PANEL_SIZE, PANEL_SIZE);

        Ok(Self {
            display,
            window: None,
        })
    }

    pub fn release(self) -> mipidsi::Display<DI, ST7735s, RST> {
        self.display
    }

    pub fn try_fill(&mut self, window: Window, color: u16) -> Result<(), DisplayError> {
        let n = window.area();
        if n == 0 {
            return Ok(());
        }
        let pixel = Rgb565::from(RawU16::new(color));
        self.display
            .set_pixels(
                window.x0 as u16,
                window.y0 as u16,
                window.x1 as u16,
                window.y1 as u16,
                iter::repeat(pixel).take(n),
            )
            .map_err(|_| DisplayError::Interface)
    }

    pub fn try_invert(&mut self, on: bool) -> Result<(), DisplayError> {
        let inversion = if on {
            ColorInversion::Inverted
        } else {
            ColorInversion::Normal
        };
        // SAFETY: INVON/INVOFF change no controller state that `mipidsi` tracks.
        unsafe { self.display.dcs() }
            .write_command(SetInvertMode::new(inversion))
            .map_err(|_| DisplayError::Interface)
    }
}

/// A fill must cover the window announced just before it.
fn paired(announced: Option<Window>, fill: Window) -> bool {
    announced == Some(fill)
}

impl<DI, RST> Display for St7735<DI, RST>
where
    DI: Interface<Word = u8>,
    RST: OutputPin,
{
    fn set_write_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        self.window = Some(Window::new(x0, y0, x1, y1));
    }

    fn fill_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: u16) {
        let fill = Window::new(x0, y0, x1, y1);
        if !paired(self.window.take(), fill) {
            warn!("st7735: fill without matching window");
        }
        if let Err(e) = self.try_fill(fill, color) {
            warn!("st7735: fill failed: {}", e);
        }
    }

    fn invert(&mut self, on: bool) {
        if let Err(e) = self.try_invert(on) {
            warn!("st7735: invert failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::raw::RawData;
    use embedded_graphics::prelude::IntoStorage;

    #[test]
    fn test_panel_covers_screen_window() {
        assert_eq!(PANEL_SIZE, 132);
        assert_eq!(Window::new(SCREEN_MIN, SCREEN_MIN, SCREEN_MAX, SCREEN_MAX).area(), 132 * 132);
    }

    #[test]
    fn test_area() {
        assert_eq!(Window::new(5, 5, 5, 5).area(), 1);
        assert_eq!(Window::new(2, 3, 4, 3).area(), 3);
        assert_eq!(Window::new(51, 0, 51, 20).area(), 21);
        assert_eq!(Window::new(6, 0, 5, 0).area(), 0);
        assert_eq!(Window::new(0, 9, 0, 8).area(), 0);
    }

    #[test]
    fn test_fill_must_match_announced_window() {
        let w = Window::new(26, 59, 36, 69);
        assert!(paired(Some(w), w));
        assert!(!paired(None, w));
        assert!(!paired(Some(Window::new(26, 59, 36, 68)), w));
    }

    #[test]
    fn test_rgb565_words_pass_through() {
        for word in [0x0000u16, 0xFFFF, 0xF800, 0x07E0, 0x001F, 0x12AB] {
            let pixel = Rgb565::from(RawU16::new(word));
            assert_eq!(pixel.into_storage(), word);
            assert_eq!(RawU16::from(pixel).into_inner(), word);
        }
    }
}
