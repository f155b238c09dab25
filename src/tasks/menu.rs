//! # Menu Task
//!
//! Sole writer of the game [`Phase`]. Turns the control button into
//! play / pause / reset and handles the end of a game.
//!
//! ```text
//!            control                  released early
//!  ┌────────┐ ──────► ┌─────────────────────┐ ──────► ┌─────────┐
//!  │ Paused │         │ HoldingForPlayOrReset│         │ Playing │
//!  └────────┘         └─────────────────────┘         └─────────┘
//!      ▲                held RESET_HOLD_TICKS│          │      │
//!      │ released                            ▼     dead │      │ control
//!  ┌────────────────────┐  ◄────────── ┌───────────┐ ◄──┘      │
//!  │ HoldingWhilePaused │              │ Resetting │           │
//!  └────────────────────┘  ◄───────────└───────────┘───────────┘
//! ```
//!
//! `Resetting` lasts exactly one tick: it requests a reset, clears the
//! dead flag, rewinds the level cursor, persists a beaten high score and
//! zeroes the score.

use crate::board::Phase;
use crate::config::RESET_HOLD_TICKS;
use crate::game::Game;
use crate::periph::{Buzzer, Chirp, ScoreStore, TextDisplay};
use crate::render::{self, BEST_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    Paused,
    HoldingForPlayOrReset,
    Playing,
    Resetting,
    HoldingWhilePaused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub state: MenuState,
    /// Ticks the control button has been held while paused.
    held: u8,
}

impl Menu {
    pub const fn new() -> Self {
        Self {
            state: MenuState::Paused,
            held: 0,
        }
    }

    pub fn tick<P>(self, game: &mut Game<P>) -> Self
    where
        P: TextDisplay + ScoreStore + Buzzer,
    {
        let next = self.transition(game);
        next.act(game)
    }

    fn transition<P: Buzzer>(mut self, game: &mut Game<P>) -> Self {
        let board = &mut game.board;

        self.state = match self.state {
            MenuState::Paused => {
                if board.control {
                    MenuState::HoldingForPlayOrReset
                } else {
                    MenuState::Paused
                }
            }
            MenuState::HoldingForPlayOrReset => {
                if board.control && self.held < RESET_HOLD_TICKS {
                    MenuState::HoldingForPlayOrReset
                } else if !board.control && self.held < RESET_HOLD_TICKS {
                    self.held = 0;
                    debug!("menu: play");
                    MenuState::Playing
                } else {
                    self.held = 0;
                    MenuState::Resetting
                }
            }
            MenuState::Playing => {
                if board.control {
                    board.phase = Phase::Paused;
                    debug!("menu: pause");
                    MenuState::HoldingWhilePaused
                } else if board.dead {
                    MenuState::Resetting
                } else {
                    MenuState::Playing
                }
            }
            MenuState::Resetting => {
                board.phase = Phase::Paused;
                game.periph.chirp(Chirp::Silence);
                MenuState::HoldingWhilePaused
            }
            MenuState::HoldingWhilePaused => {
                if board.control {
                    MenuState::HoldingWhilePaused
                } else {
                    MenuState::Paused
                }
            }
        };

        self
    }

    fn act<P>(mut self, game: &mut Game<P>) -> Self
    where
        P: TextDisplay + ScoreStore + Buzzer,
    {
        match self.state {
            MenuState::Paused => game.board.phase = Phase::Paused,
            MenuState::HoldingForPlayOrReset => self.held += 1,
            MenuState::Playing => game.board.phase = Phase::Playing,
            MenuState::Resetting => reset(game),
            MenuState::HoldingWhilePaused => {}
        }
        self
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// One-tick reset pulse.
fn reset<P>(game: &mut Game<P>)
where
    P: TextDisplay + ScoreStore + Buzzer,
{
    let board = &mut game.board;

    board.phase = Phase::Playing;
    board.dead = false;
    board.phase = Phase::ResetRequested;
    board.current_column = 0;
    game.periph.chirp(Chirp::Crash);

    info!("menu: reset, score {} best {}", board.score, board.high_score);

    if board.score > board.high_score {
        // The running score over-counts by one: the scroll task credits
        // cursor 1 on the first lap before any obstacle has been passed.
        board.high_score = board.score - 1;
        render::write_score(&mut game.periph, board.high_score, BEST_ROW);
        game.periph.write_score(board.high_score);
        info!("menu: new high score {}", board.high_score);
    }
    board.score = 0;

    render::scoreboard_init(&mut game.periph, board.score, board.high_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockPlatform};

    fn game() -> Game<MockPlatform> {
        Game::new(MockPlatform::new(), 1)
    }

    fn run(menu: Menu, game: &mut Game<MockPlatform>, control: bool, ticks: usize) -> Menu {
        let mut m = menu;
        game.board.control = control;
        for _ in 0..ticks {
            m = m.tick(game);
        }
        m
    }

    #[test]
    fn test_short_hold_starts_play() {
        let mut g = game();
        let m = run(Menu::new(), &mut g, true, 3);
        assert_eq!(m.state, MenuState::HoldingForPlayOrReset);
        assert_eq!(g.board.phase, Phase::Paused);

        let m = run(m, &mut g, false, 1);
        assert_eq!(m.state, MenuState::Playing);
        assert_eq!(g.board.phase, Phase::Playing);
        assert_eq!(m.held, 0);
    }

    #[test]
    fn test_reset_hold_enters_resetting_once_per_hold() {
        let mut g = game();
        let mut m = Menu::new();
        g.board.control = true;

        let mut resets = 0;
        // Paused -> Holding (held = 1) takes one tick; the threshold check
        // fires on the tick after `held` reaches RESET_HOLD_TICKS.
        for _ in 0..(RESET_HOLD_TICKS as usize + 40) {
            m = m.tick(&mut g);
            if m.state == MenuState::Resetting {
                resets += 1;
            }
        }
        assert_eq!(resets, 1, "one reset per continuous hold");
        assert_eq!(m.state, MenuState::HoldingWhilePaused);

        m = run(m, &mut g, false, 1);
        assert_eq!(m.state, MenuState::Paused);
    }

    #[test]
    fn test_hold_exactly_threshold_then_release_resets() {
        let mut g = game();
        // RESET_HOLD_TICKS ticks in the holding state.
        let m = run(Menu::new(), &mut g, true, RESET_HOLD_TICKS as usize);
        assert_eq!(m.state, MenuState::HoldingForPlayOrReset);
        assert_eq!(m.held, RESET_HOLD_TICKS);

        let m = run(m, &mut g, false, 1);
        assert_eq!(m.state, MenuState::Resetting);
        assert_eq!(g.board.phase, Phase::ResetRequested);

        let m = run(m, &mut g, false, 1);
        assert_eq!(m.state, MenuState::HoldingWhilePaused);
        assert_eq!(g.board.phase, Phase::Paused);
        assert_eq!(g.periph.chirps().last(), Some(&Chirp::Silence));
    }

    #[test]
    fn test_control_during_play_pauses() {
        let mut g = game();
        let m = run(Menu::new(), &mut g, true, 1);
        let m = run(m, &mut g, false, 2);
        assert_eq!(g.board.phase, Phase::Playing);

        let m = run(m, &mut g, true, 5);
        assert_eq!(m.state, MenuState::HoldingWhilePaused);
        assert_eq!(g.board.phase, Phase::Paused);

        let m = run(m, &mut g, false, 1);
        assert_eq!(m.state, MenuState::Paused);
    }

    #[test]
    fn test_death_resets_and_persists_score_minus_one() {
        let mut g = Game::new(MockPlatform::with_stored(3), 1);
        assert_eq!(g.board.high_score, 3);

        let m = Menu {
            state: MenuState::Playing,
            held: 0,
        };
        g.board.phase = Phase::Playing;
        g.board.score = 7;
        g.board.current_column = 40;
        g.board.dead = true;

        let m = m.tick(&mut g);
        assert_eq!(m.state, MenuState::Resetting);
        assert_eq!(g.board.phase, Phase::ResetRequested);
        assert!(!g.board.dead);
        assert_eq!(g.board.current_column, 0);
        assert_eq!(g.board.score, 0);
        // Deliberately score - 1, matching the scroll task's first-lap credit.
        assert_eq!(g.board.high_score, 6);
        assert_eq!(g.periph.stored, 6);
        assert_eq!(g.periph.store_writes, 1);
        assert_eq!(g.periph.text_row(1).as_str(), "Best:          6");
        assert!(g.periph.calls.contains(&Call::Chirp(Chirp::Crash)));
    }

    #[test]
    fn test_reset_without_record_leaves_store_alone() {
        let mut g = Game::new(MockPlatform::with_stored(10), 1);
        let m = Menu {
            state: MenuState::Playing,
            held: 0,
        };
        g.board.score = 10;
        g.board.dead = true;

        m.tick(&mut g);
        assert_eq!(g.board.high_score, 10);
        assert_eq!(g.periph.store_writes, 0);
        assert_eq!(g.board.score, 0);
    }

    #[test]
    fn test_paused_ignores_dead_flag() {
        let mut g = game();
        g.board.dead = true;
        let m = run(Menu::new(), &mut g, false, 3);
        assert_eq!(m.state, MenuState::Paused);
        assert!(g.board.dead);
    }
}
