//! # Game Tasks
//!
//! The six finite-state machines that make up the game, each owning one
//! slice of behavior. Every machine is a pure step from (state, game) to
//! (next state, game mutations), structured in two phases:
//!
//! 1. `transition` computes the next state from the current one and the
//!    blackboard (a few edge-triggered writes happen here)
//! 2. `act` runs the steady-state action of the *new* state
//!
//! Actions therefore always reflect the state being entered.
//!
//! ```text
//!  input ──control/jump──► menu ──phase──► position ──height──► death
//!                            │                                    │
//!                            └──phase──► scroll ──column/frame────┘
//!                                           │
//!                            draw ◄─────────┘ (phase, height, frame)
//! ```

pub mod death;
pub mod draw;
pub mod input;
pub mod menu;
pub mod position;
pub mod scroll;

use crate::game::Game;
use crate::periph::Platform;
use crate::task::Tickable;

pub use death::Death;
pub use draw::Draw;
pub use input::Input;
pub use menu::Menu;
pub use position::Position;
pub use scroll::Scroll;

/// Per-entry task state: one variant per machine, so a single task table
/// can hold all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Machine {
    Input(Input),
    Menu(Menu),
    Position(Position),
    Death(Death),
    Scroll(Scroll),
    Draw(Draw),
}

impl<P: Platform> Tickable<Game<P>> for Machine {
    fn tick(self, game: &mut Game<P>) -> Self {
        match self {
            Machine::Input(m) => Machine::Input(m.tick(game)),
            Machine::Menu(m) => Machine::Menu(m.tick(game)),
            Machine::Position(m) => Machine::Position(m.tick(game)),
            Machine::Death(m) => Machine::Death(m.tick(game)),
            Machine::Scroll(m) => Machine::Scroll(m.tick(game)),
            Machine::Draw(m) => Machine::Draw(m.tick(game)),
        }
    }
}
