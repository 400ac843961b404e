use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::config::CoreConfig;
use crate::device::{DevicePriorities, DeviceSchedule, DeviceStatus};
use crate::error::InputError;
use crate::state::{ElectricityPrice, Energy, Temperature};

/// Everything one evaluation looks at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    #[serde(flatten)]
    pub config: CoreConfig,
    pub current_price: ElectricityPrice,
    #[serde(with = "crate::timestamp")]
    pub current_time: PrimitiveDateTime,
    pub current_temperature: Temperature,
    pub total_energy_used_today: Energy,
    #[serde(default)]
    pub device_priorities: DevicePriorities,
    #[serde(default)]
    pub scheduled_devices: Vec<DeviceSchedule>,
}

impl EvaluationInput {
    /// Caller-side contract check. `evaluate` itself accepts anything.
    pub fn validate(&self) -> Result<(), InputError> {
        self.config.validate()?;

        if !f64::from(self.current_price).is_finite() {
            return Err(InputError::NonFinite("current_price"));
        }
        if !f64::from(self.current_temperature).is_finite() {
            return Err(InputError::NonFinite("current_temperature"));
        }
        if !f64::from(self.total_energy_used_today).is_finite() {
            return Err(InputError::NonFinite("total_energy_used_today"));
        }

        let names = self
            .device_priorities
            .keys()
            .chain(self.scheduled_devices.iter().map(|entry| &entry.device));
        for name in names {
            if name.trim().is_empty() {
                return Err(InputError::EmptyDeviceName);
            }
        }
        Ok(())
    }

    /// Strictly over the daily budget; usage equal to the limit is fine.
    pub fn usage_limit_exceeded(&self) -> bool {
        self.total_energy_used_today > self.config.energy_usage_limit
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub device_status: DeviceStatus,
    pub energy_saving_mode: bool,
    pub temperature_regulation_active: bool,
    pub total_energy_used: Energy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemperatureRange;
    use crate::state::Priority;
    use time::macros::datetime;

    fn input() -> EvaluationInput {
        EvaluationInput {
            config: CoreConfig {
                price_threshold: ElectricityPrice::new(0.05),
                desired_temperature: TemperatureRange {
                    low: Temperature::new(20.0),
                    high: Temperature::new(25.0),
                },
                energy_usage_limit: Energy::new(100.0),
            },
            current_price: ElectricityPrice::new(0.1),
            current_time: datetime!(2021-01-01 12:00),
            current_temperature: Temperature::new(22.0),
            total_energy_used_today: Energy::new(50.0),
            device_priorities: DevicePriorities::from([
                ("Lights".to_string(), Priority::new(1)),
                ("Appliances".to_string(), Priority::new(2)),
            ]),
            scheduled_devices: vec![DeviceSchedule::new("Oven", datetime!(2021-01-01 18:00))],
        }
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "price_threshold": 0.05,
            "desired_temperature": { "low": 20.0, "high": 25.0 },
            "energy_usage_limit": 100.0,
            "current_price": 0.1,
            "current_time": "2021-01-01T12:00",
            "current_temperature": 22.0,
            "total_energy_used_today": 50.0,
            "device_priorities": { "Lights": 1, "Appliances": 2 },
            "scheduled_devices": [ { "device": "Oven", "at": "2021-01-01T18:00" } ]
        }"#;
        let parsed: EvaluationInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, input());
    }

    #[test]
    fn test_devices_and_schedule_default_to_empty() {
        let json = r#"{
            "price_threshold": 0.05,
            "desired_temperature": { "low": 20.0, "high": 25.0 },
            "energy_usage_limit": 100.0,
            "current_price": 0.1,
            "current_time": "2021-01-01T12:00",
            "current_temperature": 22.0,
            "total_energy_used_today": 50.0
        }"#;
        let parsed: EvaluationInput = serde_json::from_str(json).unwrap();
        assert!(parsed.device_priorities.is_empty());
        assert!(parsed.scheduled_devices.is_empty());
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert_eq!(input().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_range_fails_validation() {
        let mut input = input();
        input.config.desired_temperature = TemperatureRange {
            low: Temperature::new(25.0),
            high: Temperature::new(20.0),
        };
        assert_eq!(
            input.validate(),
            Err(InputError::InvertedTemperatureRange { low: 25.0, high: 20.0 })
        );
    }

    #[test]
    fn test_blank_scheduled_device_fails_validation() {
        let mut input = input();
        input
            .scheduled_devices
            .push(DeviceSchedule::new(" ", datetime!(2021-01-01 18:00)));
        assert_eq!(input.validate(), Err(InputError::EmptyDeviceName));
    }

    #[test]
    fn test_usage_limit_exceeded_is_strict() {
        let mut input = input();
        input.config.energy_usage_limit = Energy::new(50.0);

        input.total_energy_used_today = Energy::new(50.0);
        assert!(!input.usage_limit_exceeded());

        input.total_energy_used_today = Energy::new(50.5);
        assert!(input.usage_limit_exceeded());
    }

    #[test]
    fn test_infinite_temperature_fails_validation() {
        let mut input = input();
        input.current_temperature = Temperature::new(f64::INFINITY);
        assert_eq!(
            input.validate(),
            Err(InputError::NonFinite("current_temperature"))
        );
    }
}
