//! # Synchronization Primitives
//!
//! Interrupt-safe ownership of the kernel. The kernel is built in `main`,
//! installed once, and from then on only touched from the timer interrupt.
//! Every access goes through a critical section so `main` and the ISR can
//! never hold it at the same time.
//!
//! On target the `critical-section` implementation comes from `cortex-m`
//! (single-core: interrupts disabled on entry, restored on exit).

use core::cell::RefCell;

use critical_section::Mutex;

/// A `static`-friendly slot holding a value owned by interrupt context.
///
/// # Usage
/// ```ignore
/// static KERNEL: Shared<Kernel<Hardware>> = Shared::new();
///
/// KERNEL.install(kernel);
/// // in the ISR:
/// KERNEL.with(|k| k.tick());
/// ```
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store `value`, returning whatever was installed before.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(value)))
    }

    /// Run `f` on the installed value inside a critical section.
    ///
    /// Returns `None` if nothing has been installed yet. Keep `f` short:
    /// interrupts are masked for its whole duration.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_before_install_is_none() {
        let slot: Shared<u32> = Shared::new();
        assert!(!slot.is_installed());
        assert_eq!(slot.with(|v| *v), None);
    }

    #[test]
    fn test_install_and_mutate() {
        static SLOT: Shared<u32> = Shared::new();
        assert_eq!(SLOT.install(1), None);
        assert_eq!(SLOT.with(|v| {
            *v += 1;
            *v
        }), Some(2));
        assert_eq!(SLOT.install(10), Some(2));
        assert!(SLOT.is_installed());
    }
}
