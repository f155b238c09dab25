//! Two push buttons on GPIO inputs.

use embedded_hal::digital::InputPin;

use crate::periph::{InputPins, Pin};

/// Pin level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    /// Pulled up, switch to ground.
    Low,
}

pub struct Buttons<C, J> {
    control: C,
    jump: J,
    active: ActiveLevel,
}

impl<C: InputPin, J: InputPin> Buttons<C, J> {
    pub fn new(control: C, jump: J, active: ActiveLevel) -> Self {
        Self { control, jump, active }
    }

    fn pressed<E>(active: ActiveLevel, high: Result<bool, E>) -> bool {
        match high {
            Ok(high) => high == (active == ActiveLevel::High),
            Err(_) => {
                warn!("buttons: read failed");
                false
            }
        }
    }
}

impl<C: InputPin, J: InputPin> InputPins for Buttons<C, J> {
    fn read_digital(&mut self, pin: Pin) -> bool {
        match pin {
            Pin::Control => Self::pressed(self.active, self.control.is_high()),
            Pin::Jump => Self::pressed(self.active, self.jump.is_high()),
        }
    }
}
