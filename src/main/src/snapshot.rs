use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::{fs, io};
use time::PrimitiveDateTime;

use control::{
    CoreConfig, DevicePriorities, DeviceSchedule, DeviceStatus, ElectricityPrice, Energy,
    EvaluationInput, Temperature, TemperatureRange,
};

use crate::electricity_price::HourlyElectricityPrice;

/// Snapshot as handed to the command line. Household settings and the
/// price may be left out and are filled in from config and the price table.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub price_threshold: Option<ElectricityPrice>,
    pub desired_temperature: Option<TemperatureRange>,
    pub energy_usage_limit: Option<Energy>,
    pub current_price: Option<ElectricityPrice>,
    #[serde(with = "control::timestamp")]
    pub current_time: PrimitiveDateTime,
    pub current_temperature: Temperature,
    pub total_energy_used_today: Energy,
    #[serde(default)]
    pub device_priorities: DevicePriorities,
    #[serde(default)]
    pub scheduled_devices: Vec<DeviceSchedule>,
    // What the devices are doing right now, if known
    #[serde(default)]
    pub device_status: DeviceStatus,
}

impl Snapshot {
    pub fn read(path: Option<&Path>) -> Result<Snapshot> {
        let json = match path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?,
            None => {
                let mut json = String::new();
                io::stdin()
                    .read_to_string(&mut json)
                    .context("Failed to read snapshot from stdin")?;
                json
            }
        };
        let snapshot = serde_json::from_str(&json).context("Failed to parse snapshot")?;
        Ok(snapshot)
    }

    /// The snapshot's own price wins over the table.
    pub fn resolve_price(
        &self,
        prices: Option<&HourlyElectricityPrice>,
    ) -> Result<ElectricityPrice> {
        match (self.current_price, prices) {
            (Some(price), _) => Ok(price),
            (None, Some(prices)) => prices.current_price(self.current_time),
            (None, None) => bail!("Snapshot has no current_price and no price table was given"),
        }
    }

    /// Split into the engine input and the observed device status.
    pub fn into_input(
        self,
        defaults: &CoreConfig,
        current_price: ElectricityPrice,
    ) -> (EvaluationInput, DeviceStatus) {
        let input = EvaluationInput {
            config: CoreConfig {
                price_threshold: self.price_threshold.unwrap_or(defaults.price_threshold),
                desired_temperature: self
                    .desired_temperature
                    .unwrap_or(defaults.desired_temperature),
                energy_usage_limit: self.energy_usage_limit.unwrap_or(defaults.energy_usage_limit),
            },
            current_price,
            current_time: self.current_time,
            current_temperature: self.current_temperature,
            total_energy_used_today: self.total_energy_used_today,
            device_priorities: self.device_priorities,
            scheduled_devices: self.scheduled_devices,
        };
        (input, self.device_status)
    }
}
