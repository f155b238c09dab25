//! # Cortex-M4 Port Layer
//!
//! Tick source for the scheduler. SysTick fires once per scheduler base
//! period; the firmware's `SysTick` exception handler calls
//! `Kernel::tick()`, which runs every due task to completion before
//! returning. There is no context switch and no PendSV: tasks share the
//! interrupt's stack.
//!
//! ## Interrupt Priorities
//!
//! - SysTick: Priority 0xFF (lowest). The handler runs the whole tick
//!   inside `Shared::with`, a critical section, so nothing preempts a tick
//!   once it has started.

use cortex_m::peripheral::scb::SystemHandler;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::{SCB, SYST};

use crate::config::SYSTEM_CLOCK_HZ;

/// Largest value the 24-bit SysTick reload register holds.
const SYST_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// SysTick reload value for `base_period_ms` at `SYSTEM_CLOCK_HZ`.
///
/// Returns `None` if the period does not fit the 24-bit counter.
pub const fn systick_reload(base_period_ms: u32) -> Option<u32> {
    let cycles = (SYSTEM_CLOCK_HZ / 1000) as u64 * base_period_ms as u64;
    if cycles == 0 || cycles - 1 > SYST_MAX_RELOAD as u64 {
        None
    } else {
        Some((cycles - 1) as u32)
    }
}

/// Configure SysTick to fire every `base_period_ms` using the core clock.
///
/// Returns `false` (timer untouched) if the period is out of range.
pub fn configure_systick(syst: &mut SYST, base_period_ms: u32) -> bool {
    let Some(reload) = systick_reload(base_period_ms) else {
        error!("systick: base period {} ms out of range", base_period_ms);
        return false;
    };

    syst.set_reload(reload);
    syst.clear_current();
    syst.set_clock_source(SystClkSource::Core);
    syst.enable_counter();
    syst.enable_interrupt();
    info!("systick: reload {} for {} ms", reload, base_period_ms);
    true
}

/// Put SysTick at the lowest exception priority.
pub fn set_interrupt_priorities(scb: &mut SCB) {
    // Safety: changing SysTick's priority cannot break a priority-based
    // critical section; the kernel uses interrupt masking instead.
    unsafe {
        scb.set_priority(SystemHandler::SysTick, 0xFF);
    }
}
