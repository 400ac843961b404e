use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::state::{ElectricityPrice, Energy, Temperature};

/// Night mode covers `[NIGHT_START_HOUR:00, NIGHT_END_HOUR:00)`.
pub const NIGHT_START_HOUR: u8 = 23;
pub const NIGHT_END_HOUR: u8 = 6;

/// Energy credited back for every device shut off by usage-limit correction.
pub const USAGE_CORRECTION_UNIT: f64 = 1.0;

/// Desired temperature band. Both bounds count as "in range".
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub low: Temperature,
    pub high: Temperature,
}

impl TemperatureRange {
    pub fn new(low: Temperature, high: Temperature) -> Result<Self, InputError> {
        let range = TemperatureRange { low, high };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !f64::from(self.low).is_finite() {
            return Err(InputError::NonFinite("desired_temperature.low"));
        }
        if !f64::from(self.high).is_finite() {
            return Err(InputError::NonFinite("desired_temperature.high"));
        }
        if self.low > self.high {
            return Err(InputError::InvertedTemperatureRange {
                low: self.low.into(),
                high: self.high.into(),
            });
        }
        Ok(())
    }

    pub fn is_below(&self, temperature: Temperature) -> bool {
        temperature < self.low
    }

    pub fn is_above(&self, temperature: Temperature) -> bool {
        temperature > self.high
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    // Electricity price above which energy saving mode kicks in
    pub price_threshold: ElectricityPrice,

    // Band the heating and cooling try to hold
    pub desired_temperature: TemperatureRange,

    // Daily budget; exceeding it sheds non-critical devices
    pub energy_usage_limit: Energy,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), InputError> {
        if !f64::from(self.price_threshold).is_finite() {
            return Err(InputError::NonFinite("price_threshold"));
        }
        self.desired_temperature.validate()?;

        let limit = f64::from(self.energy_usage_limit);
        if !limit.is_finite() {
            return Err(InputError::NonFinite("energy_usage_limit"));
        }
        if limit < 0.0 {
            return Err(InputError::NegativeUsageLimit(limit));
        }
        Ok(())
    }
}
