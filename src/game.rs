//! # Game Context
//!
//! The state every task transition function receives: the blackboard,
//! the level store, the obstacle RNG and the peripherals. Replaces global
//! mutable state with one explicit struct passed by `&mut`.

use crate::board::Blackboard;
use crate::level::{Column, Level};
use crate::periph::Platform;
use crate::rng::Rng;

pub struct Game<P> {
    pub board: Blackboard,
    pub level: Level,
    pub rng: Rng,
    pub periph: P,
}

impl<P: Platform> Game<P> {
    /// Build the context, loading the persisted high score and laying out
    /// the first level.
    pub fn new(mut periph: P, seed: u32) -> Self {
        let high_score = periph.read_score();
        let mut game = Self {
            board: Blackboard::new(high_score),
            level: Level::new(),
            rng: Rng::new(seed),
            periph,
        };
        game.level.generate(&mut game.rng);
        game
    }
}

impl<P> Game<P> {
    /// The column the death task checks against.
    #[inline]
    pub fn current_column(&self) -> &Column {
        self.level.column(self.board.current_column)
    }

    pub fn regenerate_level(&mut self) {
        self.level.generate(&mut self.rng);
    }
}
