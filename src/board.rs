//! # Blackboard
//!
//! Cross-task variables. Tasks never call each other; they communicate
//! only through these fields and the level store.
//!
//! ## Ownership
//!
//! Every field has exactly one writing task. All other tasks read it as it
//! was left by the tasks that ran earlier in the same tick (or the previous
//! tick, for writers scheduled later). Since all tasks run to completion
//! inside one timer interrupt, reads and writes never interleave and no
//! locking is needed.
//!
//! | Field | Writer | Readers |
//! |-------|--------|---------|
//! | `control`, `jump` | input | menu, position |
//! | `phase` | menu | position, scroll, draw |
//! | `height` | position (death recenters on leaving bounds) | death, draw |
//! | `dead` | death (menu clears on reset) | menu, position |
//! | `score` | scroll (menu zeroes on reset) | menu |
//! | `high_score` | menu | menu, render |
//! | `frame` | scroll | death, draw |
//! | `current_column` | scroll (menu rewinds on reset) | death |

use crate::config::START_HEIGHT;

/// Three-way game mode gating most tasks' behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Paused,
    Playing,
    ResetRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blackboard {
    /// Control input held (level-triggered).
    pub control: bool,
    /// Jump impulse, true for exactly one tick per press.
    pub jump: bool,
    pub phase: Phase,
    /// Player vertical position. Valid range is enforced by the death task.
    pub height: i32,
    pub dead: bool,
    pub score: i32,
    pub high_score: i32,
    /// Scroll cursor as seen at the start of the last scroll tick.
    pub frame: usize,
    /// Index into the level store of the column the player occupies.
    pub current_column: usize,
}

impl Blackboard {
    pub const fn new(high_score: i32) -> Self {
        Self {
            control: false,
            jump: false,
            phase: Phase::Paused,
            height: START_HEIGHT,
            dead: false,
            score: 0,
            high_score,
            frame: 0,
            current_column: 0,
        }
    }
}
