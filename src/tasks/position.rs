//! # Position Task
//!
//! Integer player physics. Sole writer of `height` during play.
//!
//! ```text
//!             jump                     hang time expired
//!  ┌─────────┐ ─────► ┌─────────┐  ─────────────────────►  ┌─────────┐
//!  │ Falling │        │ Jumping │                          │ Falling │
//!  └─────────┘        └─────────┘                          └─────────┘
//!       │ paused           │ paused (hang counter kept)
//!       ▼                  ▼
//!  ┌──────────────────────────┐  reset  ┌────────────┐
//!  │          Frozen          │ ──────► │ Restarting │ ──► Frozen
//!  └──────────────────────────┘         └────────────┘
//!       │ playing: mid-jump (0 < hang < HANG_TICKS) ? Jumping : Falling
//! ```
//!
//! - **Falling**: `speed += ACCEL`, `height -= speed`
//! - **Jumping**: `height += ASCENT` for `HANG_TICKS` ticks; a new impulse
//!   restarts the counter instead of stacking

use crate::board::Phase;
use crate::config::{ACCEL, ASCENT, HANG_TICKS, START_HEIGHT, START_SPEED};
use crate::game::Game;
use crate::periph::{Buzzer, Chirp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionState {
    Falling,
    Jumping,
    Frozen,
    Restarting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub state: PositionState,
    /// Jumping ticks elapsed; survives a pause so a jump can resume.
    hang: u8,
    /// Current fall speed.
    speed: i32,
}

impl Position {
    /// Starts in `Restarting` so the first tick places the player.
    pub const fn new() -> Self {
        Self {
            state: PositionState::Restarting,
            hang: 0,
            speed: START_SPEED,
        }
    }

    pub fn tick<P: Buzzer>(self, game: &mut Game<P>) -> Self {
        let next = self.transition(game);
        next.act(game)
    }

    fn transition<P: Buzzer>(mut self, game: &mut Game<P>) -> Self {
        let board = &mut game.board;
        let phase = board.phase;

        self.state = match self.state {
            PositionState::Falling => {
                if board.jump && phase == Phase::Playing {
                    game.periph.chirp(Chirp::Flap);
                    PositionState::Jumping
                } else if phase == Phase::ResetRequested {
                    board.height = START_HEIGHT;
                    self.speed = START_SPEED;
                    PositionState::Restarting
                } else if phase == Phase::Paused {
                    PositionState::Frozen
                } else {
                    PositionState::Falling
                }
            }
            PositionState::Jumping => {
                if phase == Phase::Paused {
                    PositionState::Frozen
                } else if self.hang < HANG_TICKS && phase == Phase::Playing && !board.dead {
                    if board.jump {
                        self.hang = 0;
                    }
                    PositionState::Jumping
                } else if self.hang >= HANG_TICKS && phase != Phase::ResetRequested {
                    self.end_jump(&mut game.periph)
                } else if phase == Phase::ResetRequested {
                    board.height = START_HEIGHT;
                    self.speed = START_SPEED;
                    self.hang = 0;
                    PositionState::Restarting
                } else {
                    // Dead mid-jump: hold until the menu resets.
                    PositionState::Jumping
                }
            }
            PositionState::Frozen => match phase {
                // Paused on the tick the hang time ran out.
                Phase::Playing if self.hang >= HANG_TICKS => self.end_jump(&mut game.periph),
                Phase::Playing if self.hang != 0 => PositionState::Jumping,
                Phase::Playing => PositionState::Falling,
                Phase::Paused => PositionState::Frozen,
                Phase::ResetRequested => PositionState::Restarting,
            },
            PositionState::Restarting => {
                board.height = START_HEIGHT;
                self.speed = START_SPEED;
                PositionState::Frozen
            }
        };

        self
    }

    fn end_jump<P: Buzzer>(&mut self, periph: &mut P) -> PositionState {
        self.speed = START_SPEED;
        self.hang = 0;
        periph.chirp(Chirp::Silence);
        PositionState::Falling
    }

    fn act<P>(mut self, game: &mut Game<P>) -> Self {
        match self.state {
            PositionState::Falling => {
                self.speed += ACCEL;
                game.board.height -= self.speed;
            }
            PositionState::Jumping => {
                self.hang += 1;
                game.board.height += ASCENT;
            }
            PositionState::Frozen | PositionState::Restarting => {}
        }
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
