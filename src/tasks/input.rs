//! # Input Task
//!
//! Samples the two buttons once per tick and publishes `control` and
//! `jump` on the blackboard.
//!
//! ```text
//!              control && !jump_pin              jump_pin && !control
//!  ┌────────────────┐ ◄──────── ┌──────┐ ────────► ┌─────────────┐
//!  │ HoldingControl │           │ Idle │           │ HoldingJump │
//!  └────────────────┘ ────────► └──────┘ ◄──────── └─────────────┘
//!               released                      released
//! ```
//!
//! - `control` is level-triggered: true while the button is held.
//! - `jump` is edge-triggered: true on the tick the press is first seen,
//!   forced false on every later tick of the same hold.

use crate::game::Game;
use crate::periph::{InputPins, Pin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputState {
    Idle,
    HoldingControl,
    HoldingJump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    pub state: InputState,
}

impl Input {
    pub const fn new() -> Self {
        Self {
            state: InputState::Idle,
        }
    }

    pub fn tick<P: InputPins>(self, game: &mut Game<P>) -> Self {
        let next = self.transition(game);
        next.act(game);
        next
    }

    fn transition<P: InputPins>(self, game: &mut Game<P>) -> Self {
        let control = game.periph.read_digital(Pin::Control);
        let jump = game.periph.read_digital(Pin::Jump);
        let board = &mut game.board;

        let state = match self.state {
            InputState::Idle => {
                if control && !jump {
                    board.control = true;
                    InputState::HoldingControl
                } else if jump && !control {
                    board.jump = true;
                    InputState::HoldingJump
                } else {
                    InputState::Idle
                }
            }
            InputState::HoldingControl => {
                if control {
                    InputState::HoldingControl
                } else {
                    InputState::Idle
                }
            }
            InputState::HoldingJump => {
                if jump {
                    // One impulse per press.
                    board.jump = false;
                    InputState::HoldingJump
                } else {
                    InputState::Idle
                }
            }
        };

        Self { state }
    }

    fn act<P>(self, game: &mut Game<P>) {
        match self.state {
            InputState::Idle => {
                game.board.control = false;
                game.board.jump = false;
            }
            InputState::HoldingControl => game.board.control = true,
            InputState::HoldingJump => {}
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
