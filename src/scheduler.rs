//! # Scheduler
//!
//! Cooperative, period-based scheduler. A single hardware timer fires at
//! the base period (the GCD of all task periods); each fire calls
//! [`Scheduler::tick`], which steps every task whose elapsed time has
//! reached its period.
//!
//! ## Scheduling Algorithm
//!
//! At each timer interrupt, for every task in table order:
//! 1. **Check**: if `elapsed == period`, the task is due
//! 2. **Fire**: `state = transition(state)`, `elapsed = 0`
//! 3. **Advance**: unconditionally `elapsed += base_period`
//!
//! ## Ordering
//!
//! Table order is fixed at construction and significant: a task sees the
//! shared state exactly as left by the tasks before it in the same tick,
//! and never a write made later in that tick. There is no preemption,
//! no dynamic task creation and no locking; mutual exclusion is
//! structural.

use crate::task::{Task, Tickable};

/// Task table construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// The table holds no tasks.
    EmptyTable,
    /// A task has a zero period; it would never become due.
    ZeroPeriod { index: usize },
}

/// Fixed, ordered task table plus the base period it is ticked at.
pub struct Scheduler<M, const N: usize> {
    tasks: [Task<M>; N],
    base_period_ms: u32,
    tick_count: u64,
}

impl<M: Copy, const N: usize> Scheduler<M, N> {
    /// Build a scheduler over `tasks`, run in array order.
    ///
    /// # Returns
    /// - `Ok(scheduler)` with `base_period_ms` = GCD of all periods
    /// - `Err(SchedulerError)` if the table is empty or a period is zero
    pub fn new(tasks: [Task<M>; N]) -> Result<Self, SchedulerError> {
        if N == 0 {
            return Err(SchedulerError::EmptyTable);
        }

        let mut base = 0;
        for (index, task) in tasks.iter().enumerate() {
            if task.period_ms == 0 {
                return Err(SchedulerError::ZeroPeriod { index });
            }
            base = gcd(base, task.period_ms);
        }

        Ok(Self {
            tasks,
            base_period_ms: base,
            tick_count: 0,
        })
    }

    /// Called from the timer interrupt once per base period.
    pub fn tick<C>(&mut self, ctx: &mut C)
    where
        M: Tickable<C>,
    {
        self.tick_count += 1;

        for task in self.tasks.iter_mut() {
            if task.is_due() {
                task.fire(ctx);
            }
            task.elapsed_ms += self.base_period_ms;
        }
    }

    /// Timer interval the scheduler must be ticked at.
    pub fn base_period_ms(&self) -> u32 {
        self.base_period_ms
    }

    /// Number of scheduler ticks since start.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn tasks(&self) -> &[Task<M>; N] {
        &self.tasks
    }
}

/// Greatest common divisor; `gcd(0, b) == b`.
pub const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
