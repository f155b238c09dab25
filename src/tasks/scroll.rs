//! # Scroll Task
//!
//! Advances the level cursor one column per tick while playing, credits
//! the score as obstacles are passed and recycles obstacles behind the
//! player for the next lap.
//!
//! Publishes `frame` (the cursor as it was on entry) and `current_column`
//! (the cursor after this tick). The death task reads both on its next
//! run; that one-tick lag is expected.

use crate::board::Phase;
use crate::config::{LEVEL_SIZE, PIPE_SPACING};
use crate::game::Game;
use crate::periph::TextDisplay;
use crate::render::{self, SCORE_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollState {
    Stopped,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub state: ScrollState,
    /// Level cursor, always in `[0, LEVEL_SIZE)`.
    cursor: usize,
}

impl Scroll {
    pub const fn new() -> Self {
        Self {
            state: ScrollState::Stopped,
            cursor: 0,
        }
    }

    /// Transitions and actions share one step: the only action outside
    /// `Running` is holding (or rewinding) the cursor.
    pub fn tick<P: TextDisplay>(mut self, game: &mut Game<P>) -> Self {
        game.board.frame = self.cursor;
        let phase = game.board.phase;

        self.state = match self.state {
            ScrollState::Stopped => {
                if phase == Phase::Playing {
                    ScrollState::Running
                } else {
                    self.hold(phase);
                    ScrollState::Stopped
                }
            }
            ScrollState::Running => {
                if phase == Phase::Playing {
                    self.advance(game);
                    ScrollState::Running
                } else {
                    self.hold(phase);
                    ScrollState::Stopped
                }
            }
        };

        game.board.current_column = self.cursor;
        self
    }

    fn hold(&mut self, phase: Phase) {
        if phase == Phase::ResetRequested {
            self.cursor = 0;
        }
    }

    fn advance<P: TextDisplay>(&mut self, game: &mut Game<P>) {
        let i = self.cursor;

        if i != 0 && i % PIPE_SPACING == 1 {
            // The display shows the count before this credit.
            render::write_score(&mut game.periph, game.board.score, SCORE_ROW);
            game.board.score += 1;
            trace!("scroll: score {}", game.board.score);
        }

        if i != 0 && i % PIPE_SPACING == PIPE_SPACING - 1 {
            game.level.refresh_behind(i, &mut game.rng);
        }

        self.cursor = if i < LEVEL_SIZE - 1 { i + 1 } else { 0 };
    }
}

impl Default for Scroll {
    fn default() -> Self {
        Self::new()
    }
}
