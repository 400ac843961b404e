use serde::{Deserialize, Serialize};

// Temperature in degrees celcius
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl From<Temperature> for f64 {
    fn from(value: Temperature) -> f64 {
        value.0
    }
}

// Electricity price per kWh
// Can be negative .. that happens, sometimes
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectricityPrice(f64);

impl ElectricityPrice {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl From<ElectricityPrice> for f64 {
    fn from(value: ElectricityPrice) -> f64 {
        value.0
    }
}

// Energy used, in kWh
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Energy(f64);

impl Energy {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn less(self, amount: f64) -> Self {
        Self(self.0 - amount)
    }
}

impl From<Energy> for f64 {
    fn from(value: Energy) -> f64 {
        value.0
    }
}

/// Device priority; lower is more essential.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    /// Always-on tier (security, refrigeration, ...). Exempt from night and
    /// energy-saving suppression, and from usage-limit correction.
    pub const CRITICAL: Priority = Priority(1);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn is_critical(self) -> bool {
        self == Self::CRITICAL
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Off,
}

impl From<bool> for PowerState {
    fn from(on: bool) -> PowerState {
        if on {
            PowerState::On
        } else {
            PowerState::Off
        }
    }
}
