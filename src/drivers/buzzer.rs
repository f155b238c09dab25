//! Active buzzer on a single output pin.
//!
//! An active buzzer has its own oscillator, so both tones collapse to
//! "on". The last cue is kept so repeated cues don't touch the pin.

use embedded_hal::digital::OutputPin;

use crate::periph::{Buzzer, Chirp};

pub struct PinBuzzer<P> {
    pin: P,
    last: Option<Chirp>,
}

impl<P: OutputPin> PinBuzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, last: None }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Buzzer for PinBuzzer<P> {
    fn chirp(&mut self, chirp: Chirp) {
        if self.last == Some(chirp) {
            return;
        }
        let result = match chirp {
            Chirp::Flap | Chirp::Crash => self.pin.set_high(),
            Chirp::Silence => self.pin.set_low(),
        };
        match result {
            Ok(()) => self.last = Some(chirp),
            Err(_) => warn!("buzzer: pin write failed"),
        }
    }
}
