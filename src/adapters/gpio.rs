//! GPIO switch adapter
//!
//! Implements `SwitchOutputPort` for any embedded-hal `OutputPin`.

use embedded_hal::digital::OutputPin;

use crate::ports::output::{HardwareError, SwitchOutputPort};

/// A switch driven by one GPIO output
pub struct GpioSwitch<P: OutputPin> {
    pin: P,
    active_high: bool,
    on: bool,
}

impl<P: OutputPin> GpioSwitch<P> {
    /// Switch that is on when the pin is high (LED to ground)
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_high: true,
            on: false,
        }
    }

    /// Switch that is on when the pin is low (LED to supply)
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_high: false,
            on: false,
        }
    }

    /// Release the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> SwitchOutputPort for GpioSwitch<P> {
    fn set_state(&mut self, on: bool) -> Result<(), HardwareError> {
        let result = if on == self.active_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| HardwareError::Gpio)?;
        self.on = on;
        Ok(())
    }

    fn state(&self) -> bool {
        self.on
    }
}
