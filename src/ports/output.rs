//! Output port - the physical switch (LED) line

/// Error raised when the output line cannot be driven
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// The GPIO driver reported a failure
    Gpio,
    /// The line has not been configured as an output
    NotConfigured,
}

/// Port for a single digital output
pub trait SwitchOutputPort {
    /// Drive the line high (`true`) or low (`false`)
    fn set_state(&mut self, on: bool) -> Result<(), HardwareError>;

    /// Last level successfully driven onto the line
    fn state(&self) -> bool;
}
