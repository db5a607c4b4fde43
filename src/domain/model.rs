//! Cloud device model
//!
//! Describes the node, its devices and their parameters as registered with
//! the device-management collaborator. Names are fixed; initial values come
//! from the current telemetry.

use heapless::Vec;

use super::telemetry::TelemetryState;

/// Device exposing the temperature parameter
pub const TEMPERATURE_DEVICE: &str = "Temperature Sensor";
/// Temperature parameter name
pub const TEMPERATURE_PARAM: &str = "Temperature";

/// Device exposing the humidity parameter
pub const HUMIDITY_DEVICE: &str = "Humidity Sensor";
/// Humidity parameter name
pub const HUMIDITY_PARAM: &str = "Humidity";

/// Device controlling the LED output
pub const SWITCH_DEVICE: &str = "LED Switch";
/// Switch power parameter name
pub const POWER_PARAM: &str = "Power";

/// Number of devices on the node
pub const MAX_DEVICES: usize = 3;

/// A parameter value exchanged with the collaborator
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamValue {
    Float(f32),
    Bool(bool),
}

impl ParamValue {
    /// The boolean payload, if this is a `Bool`
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            ParamValue::Float(_) => None,
        }
    }

    /// The float payload, if this is a `Float`
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Bool(_) => None,
        }
    }
}

/// Remote request to drive the switch output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchCommand {
    pub desired: bool,
}

impl SwitchCommand {
    pub const fn new(desired: bool) -> Self {
        Self { desired }
    }
}

/// Kind of device, mapped to the collaborator's standard device types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceKind {
    TemperatureSensor,
    HumiditySensor,
    Switch,
}

/// Who may change a parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamAccess {
    /// Reported by the device only
    Read,
    /// Reported by the device and writable from the cloud
    ReadWrite,
}

/// The primary parameter of a device
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParamModel {
    pub name: &'static str,
    pub initial: ParamValue,
    pub access: ParamAccess,
}

/// One device registered on the node
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceModel {
    pub name: &'static str,
    pub kind: DeviceKind,
    pub primary: ParamModel,
}

/// Complete node description handed to the collaborator at startup
#[derive(Clone, Debug, PartialEq)]
pub struct NodeModel {
    pub name: &'static str,
    pub node_type: &'static str,
    pub devices: Vec<DeviceModel, MAX_DEVICES>,
}

impl NodeModel {
    /// Build the node model with initial values taken from `telemetry`
    pub fn from_telemetry(
        name: &'static str,
        node_type: &'static str,
        telemetry: &TelemetryState,
        switch_on: bool,
    ) -> Self {
        let devices = Vec::from_slice(&[
            DeviceModel {
                name: TEMPERATURE_DEVICE,
                kind: DeviceKind::TemperatureSensor,
                primary: ParamModel {
                    name: TEMPERATURE_PARAM,
                    initial: ParamValue::Float(telemetry.current_temperature()),
                    access: ParamAccess::Read,
                },
            },
            DeviceModel {
                name: HUMIDITY_DEVICE,
                kind: DeviceKind::HumiditySensor,
                primary: ParamModel {
                    name: HUMIDITY_PARAM,
                    initial: ParamValue::Float(telemetry.current_humidity()),
                    access: ParamAccess::Read,
                },
            },
            DeviceModel {
                name: SWITCH_DEVICE,
                kind: DeviceKind::Switch,
                primary: ParamModel {
                    name: POWER_PARAM,
                    initial: ParamValue::Bool(switch_on),
                    access: ParamAccess::ReadWrite,
                },
            },
        ])
        .unwrap_or_default();

        Self {
            name,
            node_type,
            devices,
        }
    }

    /// Look up a device by name
    pub fn device(&self, name: &str) -> Option<&DeviceModel> {
        self.devices.iter().find(|d| d.name == name)
    }
}
