use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::state::Priority;

/// Climate devices are driven by temperature alone, never by priority.
pub const HEATING: &str = "Heating";
pub const COOLING: &str = "Cooling";

pub type DevicePriorities = BTreeMap<String, Priority>;

/// Device name to on (`true`) / off (`false`).
pub type DeviceStatus = BTreeMap<String, bool>;

pub fn is_climate_device(device: &str) -> bool {
    device == HEATING || device == COOLING
}

/// Devices missing from the priority map are non-critical.
pub fn is_critical(priorities: &DevicePriorities, device: &str) -> bool {
    priorities
        .get(device)
        .is_some_and(|priority| priority.is_critical())
}

/// Request to switch a device on at one exact instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSchedule {
    pub device: String,
    #[serde(with = "crate::timestamp")]
    pub at: PrimitiveDateTime,
}

impl DeviceSchedule {
    pub fn new(device: impl Into<String>, at: PrimitiveDateTime) -> Self {
        DeviceSchedule {
            device: device.into(),
            at,
        }
    }

    pub fn is_due(&self, now: PrimitiveDateTime) -> bool {
        self.at == now
    }
}
