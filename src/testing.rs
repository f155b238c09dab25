//! Host-side test doubles.

use heapless::{String, Vec};

use crate::periph::{Buzzer, Chirp, Display, InputPins, Pin, ScoreStore, TextDisplay};

const MAX_CALLS: usize = 1024;
const ROWS: usize = 2;
const COLS: usize = 16;

/// One recorded peripheral call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Window(u8, u8, u8, u8),
    Fill(u8, u8, u8, u8, u16),
    Invert(bool),
    ClearText,
    Goto(u8, u8),
    Char(u8),
    StoreWrite(i32),
    Chirp(Chirp),
}

/// Records every call and simulates the input pins, the score word and a
/// 2×16 character grid.
pub struct MockPlatform {
    pub calls: Vec<Call, MAX_CALLS>,
    pub control: bool,
    pub jump: bool,
    pub stored: i32,
    pub store_writes: usize,
    text: [[u8; COLS]; ROWS],
    cursor: (usize, usize),
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            control: false,
            jump: false,
            stored: 0,
            store_writes: 0,
            text: [[b' '; COLS]; ROWS],
            cursor: (0, 0),
        }
    }

    pub fn with_stored(stored: i32) -> Self {
        Self {
            stored,
            ..Self::new()
        }
    }

    fn record(&mut self, call: Call) {
        // Long scenarios only care about recent calls.
        if self.calls.is_full() {
            self.calls.clear();
        }
        let _ = self.calls.push(call);
    }

    pub fn fills(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Fill(..))).count()
    }

    pub fn last_invert(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Invert(on) => Some(*on),
            _ => None,
        })
    }

    pub fn chirps(&self) -> Vec<Chirp, 32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Chirp(ch) => Some(*ch),
                _ => None,
            })
            .take(32)
            .collect()
    }

    pub fn text_row(&self, row: usize) -> String<COLS> {
        let mut s = String::new();
        for &b in &self.text[row] {
            let _ = s.push(b as char);
        }
        s
    }

    /// Every `Fill` must directly follow a `Window` with the same bounds.
    pub fn assert_window_fill_pairs(&self) {
        for (i, call) in self.calls.iter().enumerate() {
            if let Call::Fill(x0, y0, x1, y1, _) = *call {
                assert!(i > 0, "fill without preceding window");
                assert_eq!(
                    self.calls[i - 1],
                    Call::Window(x0, y0, x1, y1),
                    "fill at {} not paired with its window",
                    i
                );
            }
        }
    }
}

impl Display for MockPlatform {
    fn set_write_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        self.record(Call::Window(x0, y0, x1, y1));
    }

    fn fill_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: u16) {
        self.record(Call::Fill(x0, y0, x1, y1, color));
    }

    fn invert(&mut self, on: bool) {
        self.record(Call::Invert(on));
    }
}

impl TextDisplay for MockPlatform {
    fn clear(&mut self) {
        self.text = [[b' '; COLS]; ROWS];
        self.cursor = (0, 0);
        self.record(Call::ClearText);
    }

    fn goto(&mut self, row: u8, col: u8) {
        self.cursor = (row as usize, col as usize);
        self.record(Call::Goto(row, col));
    }

    fn write_char(&mut self, c: u8) {
        let (row, col) = self.cursor;
        if row < ROWS && col < COLS {
            self.text[row][col] = c;
        }
        self.cursor.1 += 1;
        self.record(Call::Char(c));
    }
}

impl ScoreStore for MockPlatform {
    fn read_score(&mut self) -> i32 {
        self.stored
    }

    fn write_score(&mut self, score: i32) {
        self.stored = score;
        self.store_writes += 1;
        self.record(Call::StoreWrite(score));
    }
}

impl InputPins for MockPlatform {
    fn read_digital(&mut self, pin: Pin) -> bool {
        match pin {
            Pin::Control => self.control,
            Pin::Jump => self.jump,
        }
    }
}

impl Buzzer for MockPlatform {
    fn chirp(&mut self, chirp: Chirp) {
        self.record(Call::Chirp(chirp));
    }
}
