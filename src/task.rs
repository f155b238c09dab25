//! # Task Entry
//!
//! Defines the task model for the cooperative scheduler. A task is a
//! finite-state machine plus its timing bookkeeping: the scheduler calls
//! its transition function once every `period_ms` and stores the returned
//! state.
//!
//! ## Tick Lifecycle
//!
//! ```text
//!   elapsed += base           elapsed == period
//!   ┌──────────┐  ─────────►  ┌──────────┐
//!   │ Waiting  │              │   Due    │
//!   └──────────┘  ◄─────────  └──────────┘
//!        ▲        state = tick(state),  │
//!        │        elapsed = 0           │
//!        └──────────────────────────────┘
//! ```
//!
//! Tasks never block. A transition must finish well inside one base
//! period, otherwise every task after it in the same tick runs late.

/// A state machine the scheduler can step.
///
/// `tick` consumes the current state and returns the next one. `C` is the
/// shared context (blackboard and peripherals) every task reads and writes.
pub trait Tickable<C> {
    fn tick(self, ctx: &mut C) -> Self;
}

/// One row of the task table.
#[derive(Debug, Clone, Copy)]
pub struct Task<M> {
    /// Current FSM state.
    pub state: M,
    /// Tick period in milliseconds.
    pub period_ms: u32,
    /// Time since the last tick. Never exceeds `period_ms` between ticks.
    pub elapsed_ms: u32,
}

impl<M> Task<M> {
    /// A task that first fires one full period after start.
    pub const fn new(state: M, period_ms: u32) -> Self {
        Self {
            state,
            period_ms,
            elapsed_ms: 0,
        }
    }

    /// Whether the task fires on this scheduler tick.
    #[inline]
    pub fn is_due(&self) -> bool {
        self.elapsed_ms == self.period_ms
    }
}

impl<M: Copy> Task<M> {
    /// Run the transition function and restart the period.
    pub fn fire<C>(&mut self, ctx: &mut C)
    where
        M: Tickable<C>,
    {
        self.state = self.state.tick(ctx);
        self.elapsed_ms = 0;
    }
}
