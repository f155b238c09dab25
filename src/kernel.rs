//! # Kernel
//!
//! Builds the fixed task table and the shared game context, and drives
//! both from the timer interrupt.
//!
//! ## Startup Sequence
//!
//! ```text
//! reset_handler (cortex-m-rt)
//!   └─► main()
//!         ├─► build adapters (display, scoreboard, EEPROM, buttons, buzzer)
//!         ├─► Kernel::new()        ← load high score, lay out level, build table
//!         ├─► KERNEL.install()     ← hand ownership to the ISR
//!         └─► arch::configure_systick(base_period)
//!               └─► SysTick ─► Kernel::tick() every base period
//! ```
//!
//! ## Task Table
//!
//! | # | Task | Period | Reads | Writes |
//! |---|------|--------|-------|--------|
//! | 0 | input | `TASK_PERIOD_MS` | pins | control, jump |
//! | 1 | menu | `TASK_PERIOD_MS` | control, dead, score | phase, score, high score |
//! | 2 | position | `TASK_PERIOD_MS` | jump, phase, dead | height |
//! | 3 | death | `TASK_PERIOD_MS` | height, frame, column | dead |
//! | 4 | scroll | `TASK_PERIOD_MS` | phase | frame, column, score |
//! | 5 | draw | `DRAW_PERIOD_MS` | phase, height, frame | display |
//!
//! Input runs before menu, menu before position, position before death.
//! Death reads the column scroll published on its previous run.

use crate::config::{DRAW_PERIOD_MS, NUM_TASKS, TASK_PERIOD_MS};
use crate::game::Game;
use crate::periph::Platform;
use crate::scheduler::{Scheduler, SchedulerError};
use crate::task::Task;
use crate::tasks::{Death, Draw, Input, Machine, Menu, Position, Scroll};

/// The whole game: scheduler plus the context its tasks share.
pub struct Kernel<P> {
    scheduler: Scheduler<Machine, NUM_TASKS>,
    game: Game<P>,
}

impl<P: Platform> Kernel<P> {
    /// Create the kernel with the default task periods.
    pub fn new(periph: P, seed: u32) -> Result<Self, SchedulerError> {
        Self::with_periods(periph, seed, TASK_PERIOD_MS, DRAW_PERIOD_MS)
    }

    /// Create the kernel with explicit periods for the game tasks and the
    /// draw task.
    pub fn with_periods(
        periph: P,
        seed: u32,
        task_period_ms: u32,
        draw_period_ms: u32,
    ) -> Result<Self, SchedulerError> {
        let scheduler = Scheduler::new([
            Task::new(Machine::Input(Input::new()), task_period_ms),
            Task::new(Machine::Menu(Menu::new()), task_period_ms),
            Task::new(Machine::Position(Position::new()), task_period_ms),
            Task::new(Machine::Death(Death::new()), task_period_ms),
            Task::new(Machine::Scroll(Scroll::new()), task_period_ms),
            Task::new(Machine::Draw(Draw::new()), draw_period_ms),
        ])?;

        let mut game = Game::new(periph, seed);
        crate::render::scoreboard_init(&mut game.periph, game.board.score, game.board.high_score);

        info!(
            "kernel: {} tasks, base period {} ms, best {}",
            NUM_TASKS,
            scheduler.base_period_ms(),
            game.board.high_score
        );

        Ok(Self { scheduler, game })
    }

    /// One timer interrupt.
    #[inline]
    pub fn tick(&mut self) {
        self.scheduler.tick(&mut self.game);
    }

    pub fn base_period_ms(&self) -> u32 {
        self.scheduler.base_period_ms()
    }

    pub fn game(&self) -> &Game<P> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<P> {
        &mut self.game
    }

    pub fn scheduler(&self) -> &Scheduler<Machine, NUM_TASKS> {
        &self.scheduler
    }
}

// ---------------------------------------------------------------------------
// Whole-game scenarios (host-only)
// ---------------------------------------------------------------------------
