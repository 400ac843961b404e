use log::*;
use serde::Serialize;

use control::{DeviceStatus, PowerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DevicePower {
    TurnOn,
    TurnOff,
}

impl From<PowerState> for DevicePower {
    fn from(power: PowerState) -> DevicePower {
        match power {
            PowerState::On => DevicePower::TurnOn,
            PowerState::Off => DevicePower::TurnOff,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceCommand {
    pub device: String,
    pub power: DevicePower,
}

/// Commands needed to move from the observed device state to the decided
/// one. Devices with no observed state are always switched.
pub fn switching_plan(desired: &DeviceStatus, observed: &DeviceStatus) -> Vec<DeviceCommand> {
    desired
        .iter()
        .filter_map(|(device, on)| {
            let power = DevicePower::from(PowerState::from(*on));
            match (power, observed.get(device)) {
                (DevicePower::TurnOn, Some(true)) | (DevicePower::TurnOff, Some(false)) => {
                    info!("{} is already in desired state {:?}", device, power);
                    return None;
                }
                (DevicePower::TurnOn, _) => info!("Turning on {}", device),
                (DevicePower::TurnOff, _) => info!("Turning off {}", device),
            }
            Some(DeviceCommand {
                device: device.clone(),
                power,
            })
        })
        .collect()
}
