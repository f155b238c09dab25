//! # Peripheral Interfaces
//!
//! Narrow interfaces to the external collaborators the game core drives.
//! The core consumes these; it never owns the hardware behind them.
//!
//! All calls are fire-and-forget. Adapters must finish well within one
//! base period and handle (or deliberately ignore) their own bus errors;
//! the core performs no retry or fallback.

/// Pixel panel. Every fill is preceded by a write-window call for the
/// same rectangle; adapters may rely on that pairing.
pub trait Display {
    fn set_write_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8);
    fn fill_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: u16);
    /// `true` inverts the panel colors, `false` restores normal mode.
    fn invert(&mut self, on: bool);
}

/// Character display carrying the scoreboard.
pub trait TextDisplay {
    fn clear(&mut self);
    fn goto(&mut self, row: u8, col: u8);
    fn write_char(&mut self, c: u8);

    fn write_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.write_char(b);
        }
    }
}

/// Durable high-score word. No transactional guarantee.
pub trait ScoreStore {
    fn read_score(&mut self) -> i32;
    fn write_score(&mut self, score: i32);
}

/// Digital inputs sampled by the input task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// Play / pause / reset.
    Control,
    Jump,
}

pub trait InputPins {
    fn read_digital(&mut self, pin: Pin) -> bool;
}

/// Tone cues. Never read back by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chirp {
    Flap,
    Crash,
    Silence,
}

pub trait Buzzer {
    fn chirp(&mut self, chirp: Chirp);
}

/// Everything the game core needs from the board.
pub trait Platform: Display + TextDisplay + ScoreStore + InputPins + Buzzer {}

impl<T> Platform for T where T: Display + TextDisplay + ScoreStore + InputPins + Buzzer {}
