mod config;
mod device;
mod error;
mod input;
pub mod stages;
mod state;
pub mod timestamp;

use std::collections::BTreeSet;

use log::*;

pub use config::{CoreConfig, TemperatureRange, NIGHT_END_HOUR, NIGHT_START_HOUR, USAGE_CORRECTION_UNIT};
pub use device::{
    is_climate_device, is_critical, DevicePriorities, DeviceSchedule, DeviceStatus, COOLING,
    HEATING,
};
pub use error::InputError;
pub use input::{EvaluationInput, EvaluationResult};
pub use state::{ElectricityPrice, Energy, PowerState, Priority, Temperature};

/// Every device the result reports on: all prioritised devices, all
/// scheduled devices and the two climate devices.
pub fn device_names(input: &EvaluationInput) -> BTreeSet<&str> {
    input
        .device_priorities
        .keys()
        .map(String::as_str)
        .chain(input.scheduled_devices.iter().map(|entry| entry.device.as_str()))
        .chain([HEATING, COOLING])
        .collect()
}

/// Decide which devices run for one snapshot.
///
/// Never fails: malformed input is the caller's problem, see
/// [`EvaluationInput::validate`].
pub fn evaluate(input: &EvaluationInput) -> EvaluationResult {
    let config = &input.config;

    let mode = stages::classify_mode(input.current_time, input.current_price, config.price_threshold);

    let mut status = stages::base_status(device_names(input), &input.device_priorities, mode);

    let regulation = stages::regulate_temperature(
        &mut status,
        input.current_temperature,
        &config.desired_temperature,
    );

    stages::apply_schedule(&mut status, &input.scheduled_devices, input.current_time);

    let total_energy_used = stages::enforce_usage_limit(
        &mut status,
        &input.device_priorities,
        input.total_energy_used_today,
        config.energy_usage_limit,
    );

    debug!("Decided {:?}", status);

    EvaluationResult {
        device_status: status,
        energy_saving_mode: mode.energy_saving,
        temperature_regulation_active: regulation.is_active(),
        total_energy_used,
    }
}
