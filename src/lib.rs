//! # flapsched
//!
//! A cooperative, period-based task scheduler for ARM Cortex-M4
//! microcontrollers, and the side-scrolling flyer game that runs on it.
//!
//! ## Overview
//!
//! Six finite-state machines share one timer interrupt. Each has a period
//! in milliseconds; the timer fires at the greatest common divisor of all
//! periods, and on every tick each due machine advances exactly one step,
//! in table order, to completion. Machines talk only through a shared
//! blackboard of game variables.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │        Firmware (main.rs): board bring-up, SysTick      │
//! ├────────────────────────────────────────────────────────┤
//! │                 Kernel (kernel.rs)                      │
//! │            task table · game context · tick()           │
//! ├──────────────┬────────────────────┬───────────────────┤
//! │  Scheduler   │   Game tasks       │  Sync             │
//! │  scheduler.rs│   tasks/*.rs       │  sync.rs          │
//! │  ─ gcd base  │   input · menu     │  ─ Shared<T>      │
//! │  ─ tick()    │   position · death │                   │
//! │              │   scroll · draw    │                   │
//! ├──────────────┴────────────────────┴───────────────────┤
//! │   Game state: board.rs · level.rs · rng.rs · render.rs  │
//! ├────────────────────────────────────────────────────────┤
//! │   Peripheral traits (periph.rs) ◄── drivers/*.rs        │
//! ├────────────────────────────────────────────────────────┤
//! │            Arch Port (arch/cortex_m4.rs)                │
//! │                 SysTick · priorities                    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Memory Model
//!
//! - **No heap**: all state is statically sized
//! - **No `alloc`**: `core` plus `heapless` only
//! - **Fixed task table**: `[Task<Machine>; NUM_TASKS]`
//! - **One owner**: the kernel lives in a `Shared` slot touched only
//!   inside critical sections
//!
//! ## Host Testing
//!
//! Everything except `main.rs` builds for the host. The game core is
//! generic over the peripheral traits, so `cargo test` runs the whole game
//! against a recording mock.

#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod rng;
pub mod board;
pub mod level;
pub mod periph;
pub mod render;
pub mod game;
pub mod task;
pub mod scheduler;
pub mod tasks;
pub mod kernel;
pub mod sync;
pub mod arch;
pub mod drivers;

#[cfg(test)]
mod testing;
