//! # Draw Task
//!
//! Render dispatch. `Setup` clears the screen and lays out a fresh level;
//! `Drawing` redraws the player and every visible obstacle each tick.
//!
//! While paused the panel inversion is toggled every tick so the frozen
//! scene blinks; otherwise the panel is kept in normal mode.

use crate::board::Phase;
use crate::game::Game;
use crate::periph::Display;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawState {
    Setup,
    Drawing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub state: DrawState,
    /// Height the sprite was last drawn at, -1 before the first draw.
    last_height: i32,
    /// Inversion state during the pause blink.
    inverted: bool,
}

impl Draw {
    pub const fn new() -> Self {
        Self {
            state: DrawState::Setup,
            last_height: -1,
            inverted: false,
        }
    }

    pub fn tick<P: Display>(self, game: &mut Game<P>) -> Self {
        let next = self.transition(game);
        next.act(game)
    }

    fn transition<P: Display>(mut self, game: &mut Game<P>) -> Self {
        self.state = match self.state {
            DrawState::Setup => {
                game.periph.invert(false);
                self.inverted = false;
                render::fill_background(&mut game.periph);
                game.regenerate_level();
                info!("draw: level regenerated");
                DrawState::Drawing
            }
            DrawState::Drawing => {
                if game.board.phase == Phase::ResetRequested {
                    DrawState::Setup
                } else {
                    DrawState::Drawing
                }
            }
        };
        self
    }

    fn act<P: Display>(mut self, game: &mut Game<P>) -> Self {
        match self.state {
            DrawState::Setup => {}
            DrawState::Drawing => {
                let paused = game.board.phase == Phase::Paused;
                if paused {
                    self.inverted = !self.inverted;
                    game.periph.invert(self.inverted);
                }

                let height = game.board.height;
                render::draw_player(&mut game.periph, self.last_height, height);
                self.last_height = height;
                render::draw_pipes(&mut game.periph, &game.level, game.board.frame);

                if !paused {
                    self.inverted = false;
                    game.periph.invert(false);
                }
            }
        }
        self
    }
}

impl Default for Draw {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BACKGROUND, SCREEN_MAX, SCREEN_MIN};
    use crate::level::Column;
    use crate::testing::{Call, MockPlatform};

    fn game() -> Game<MockPlatform> {
        Game::new(MockPlatform::new(), 5)
    }

    #[test]
    fn test_setup_clears_regenerates_and_draws() {
        let mut g = game();
        g.board.phase = Phase::Playing;
        g.level.set(0, Column::obstacle(50));

        let d = Draw::new().tick(&mut g);
        assert_eq!(d.state, DrawState::Drawing);
        assert_eq!(g.periph.calls[0], Call::Invert(false));
        assert_eq!(g.periph.calls[1], Call::Window(SCREEN_MIN, SCREEN_MIN, SCREEN_MAX, SCREEN_MAX));
        assert_eq!(
            g.periph.calls[2],
            Call::Fill(SCREEN_MIN, SCREEN_MIN, SCREEN_MAX, SCREEN_MAX, BACKGROUND)
        );
        assert!(!g.level.column(0).has_obstacle, "layout regenerated");
        assert!(g.periph.fills() > 1, "scene drawn in the same tick");
        g.periph.assert_window_fill_pairs();
    }

    #[test]
    fn test_reset_request_returns_to_setup() {
        let mut g = game();
        let d = Draw::new().tick(&mut g);

        g.board.phase = Phase::ResetRequested;
        let d = d.tick(&mut g);
        assert_eq!(d.state, DrawState::Setup);

        g.board.phase = Phase::Paused;
        let d = d.tick(&mut g);
        assert_eq!(d.state, DrawState::Drawing);
    }

    #[test]
    fn test_paused_blinks() {
        let mut g = game();
        g.board.phase = Phase::Paused;
        let mut d = Draw::new().tick(&mut g);
        assert_eq!(g.periph.last_invert(), Some(true));

        d = d.tick(&mut g);
        assert_eq!(g.periph.last_invert(), Some(false));

        d.tick(&mut g);
        assert_eq!(g.periph.last_invert(), Some(true));
    }

    #[test]
    fn test_playing_keeps_normal_mode() {
        let mut g = game();
        g.board.phase = Phase::Paused;
        let d = Draw::new().tick(&mut g);
        assert_eq!(g.periph.last_invert(), Some(true));

        g.board.phase = Phase::Playing;
        let mut d = d.tick(&mut g);
        assert_eq!(g.periph.last_invert(), Some(false));
        d = d.tick(&mut g);
        assert_eq!(g.periph.last_invert(), Some(false));
        assert_eq!(d.state, DrawState::Drawing);
    }

    #[test]
    fn test_player_erased_at_previous_height() {
        let mut g = game();
        g.board.phase = Phase::Playing;
        g.board.height = 64;
        let d = Draw::new().tick(&mut g);

        g.periph.calls.clear();
        g.board.height = 70;
        d.tick(&mut g);
        assert_eq!(g.periph.calls[0], Call::Window(26, 59, 36, 69));
        assert_eq!(g.periph.calls[2], Call::Window(26, 68, 36, 72));
    }
}
