//! # Death Task
//!
//! Stateless collision check, run every tick regardless of phase. Its only
//! output is the `dead` flag consumed by the menu task.
//!
//! Two checks, both kept:
//! 1. the current column against the player's center height
//! 2. a window of columns spanning the player's width around `frame`,
//!    against the player's rendered vertical extent

use crate::config::{CEILING, FLOOR, PLAYER_SIZE, START_HEIGHT};
use crate::game::Game;
use crate::level::{wrap, Column};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeathState {
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Death {
    pub state: DeathState,
}

impl Death {
    pub const fn new() -> Self {
        Self {
            state: DeathState::Check,
        }
    }

    pub fn tick<P>(self, game: &mut Game<P>) -> Self {
        let height = game.board.height;

        if !(FLOOR..=CEILING).contains(&height) {
            debug!("death: out of bounds at {}", height);
            game.board.dead = true;
            game.board.height = START_HEIGHT;
        } else if center_hits(game.current_column(), height) {
            debug!("death: hit column {}", game.board.current_column);
            game.board.dead = true;
        } else {
            game.board.dead = window_hits(game, height);
        }

        self
    }
}

impl Default for Death {
    fn default() -> Self {
        Self::new()
    }
}

/// Center height outside the opening of `column`.
fn center_hits(column: &Column, height: i32) -> bool {
    column.has_obstacle && (height < column.bottom as i32 || column.top() < height)
}

/// Rendered extent outside the opening of `column`.
fn extent_hits(column: &Column, height: i32) -> bool {
    let half = PLAYER_SIZE / 4;
    column.has_obstacle && (height - half + 1 < column.bottom as i32 || column.top() < height + half)
}

/// Any column under the player's footprint around `frame` is hit.
fn window_hits<P>(game: &Game<P>, height: i32) -> bool {
    let frame = game.board.frame as i32;
    let half = PLAYER_SIZE / 2;
    (frame - half..=frame + half).any(|i| extent_hits(game.level.column(wrap(i)), height))
}
