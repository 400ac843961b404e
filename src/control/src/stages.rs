//! The five rule stages, in the order `evaluate` runs them.
//!
//! Each stage is a pure function over the provisional device status. Later
//! stages win over earlier ones for the devices they touch.

use log::*;
use time::PrimitiveDateTime;

use crate::config::{TemperatureRange, NIGHT_END_HOUR, NIGHT_START_HOUR, USAGE_CORRECTION_UNIT};
use crate::device::{
    is_climate_device, is_critical, DevicePriorities, DeviceSchedule, DeviceStatus, COOLING,
    HEATING,
};
use crate::state::{ElectricityPrice, Energy, Temperature};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Mode {
    pub night: bool,
    pub energy_saving: bool,
}

impl Mode {
    /// Either mode restricts ordinary devices to the critical tier.
    pub fn restricts_devices(self) -> bool {
        self.night || self.energy_saving
    }
}

pub fn is_night(now: PrimitiveDateTime) -> bool {
    let hour = now.hour();
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Stage 1.
pub fn classify_mode(
    now: PrimitiveDateTime,
    price: ElectricityPrice,
    threshold: ElectricityPrice,
) -> Mode {
    let mode = Mode {
        night: is_night(now),
        energy_saving: price > threshold,
    };
    debug!("Mode at {}: {:?}", now, mode);
    mode
}

/// Stage 2. Every non-climate device runs in normal mode; under night or
/// energy saving mode only critical ones do.
pub fn base_status<'a>(
    devices: impl IntoIterator<Item = &'a str>,
    priorities: &DevicePriorities,
    mode: Mode,
) -> DeviceStatus {
    devices
        .into_iter()
        .filter(|device| !is_climate_device(device))
        .map(|device| {
            let on = !mode.restricts_devices() || is_critical(priorities, device);
            (device.to_string(), on)
        })
        .collect()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Regulation {
    pub heating: bool,
    pub cooling: bool,
}

impl Regulation {
    pub fn is_active(self) -> bool {
        self.heating || self.cooling
    }
}

/// Stage 3. Sets both climate devices from the temperature alone.
pub fn regulate_temperature(
    status: &mut DeviceStatus,
    temperature: Temperature,
    range: &TemperatureRange,
) -> Regulation {
    let regulation = Regulation {
        heating: range.is_below(temperature),
        cooling: range.is_above(temperature),
    };
    if regulation.is_active() {
        debug!(
            "Temperature {:?} outside {:?}, regulating: {:?}",
            temperature, range, regulation
        );
    }
    status.insert(HEATING.to_string(), regulation.heating);
    status.insert(COOLING.to_string(), regulation.cooling);
    regulation
}

/// Stage 4. Entries due right now force their device on.
pub fn apply_schedule(
    status: &mut DeviceStatus,
    schedule: &[DeviceSchedule],
    now: PrimitiveDateTime,
) {
    for entry in schedule.iter().filter(|entry| entry.is_due(now)) {
        debug!("{} is scheduled for {}, forcing on", entry.device, now);
        status.insert(entry.device.clone(), true);
    }
}

/// Stage 5. Over the limit, shed every running non-critical, non-climate
/// device and credit one correction unit per device shed.
pub fn enforce_usage_limit(
    status: &mut DeviceStatus,
    priorities: &DevicePriorities,
    used: Energy,
    limit: Energy,
) -> Energy {
    if used <= limit {
        return used;
    }

    let mut total = used;
    for (device, on) in status.iter_mut() {
        if !*on || is_climate_device(device) || is_critical(priorities, device) {
            continue;
        }
        debug!("Usage {:?} over limit {:?}, shedding {}", used, limit, device);
        *on = false;
        total = total.less(USAGE_CORRECTION_UNIT);
    }
    total
}
