use anyhow::{anyhow, bail, Context, Result};
use log::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use time::{PrimitiveDateTime, Time};

use control::ElectricityPrice;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HourlyElectricityPrice {
    // Validity of this data, local time
    #[serde(with = "control::timestamp")]
    pub valid_from: PrimitiveDateTime,
    #[serde(with = "control::timestamp")]
    pub valid_until: PrimitiveDateTime,
    // Map of time at start of period to the price for that hour
    #[serde(deserialize_with = "hourly_price_map")]
    pub hourly_price: HashMap<PrimitiveDateTime, ElectricityPrice>,
}

// JSON keys are strings; two spellings of the same hour are an error, not a
// silent overwrite.
fn hourly_price_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<PrimitiveDateTime, ElectricityPrice>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, ElectricityPrice>::deserialize(deserializer)?;
    let mut prices = HashMap::with_capacity(raw.len());
    for (start, price) in raw {
        let start = control::timestamp::parse(&start).map_err(D::Error::custom)?;
        if prices.insert(start, price).is_some() {
            return Err(D::Error::custom(format!(
                "duplicate price for the hour starting {}",
                start
            )));
        }
    }
    Ok(prices)
}

impl HourlyElectricityPrice {
    pub fn load(path: &Path) -> Result<HourlyElectricityPrice> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read price table {}", path.display()))?;
        let data: HourlyElectricityPrice = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse price table {}", path.display()))?;
        info!(
            "Loaded {} hourly prices valid from {} until {}",
            data.hourly_price.len(),
            data.valid_from,
            data.valid_until
        );
        Ok(data)
    }

    pub fn is_valid_at(&self, now: PrimitiveDateTime) -> bool {
        now >= self.valid_from && now < self.valid_until
    }

    pub fn current_price(&self, now: PrimitiveDateTime) -> Result<ElectricityPrice> {
        if !self.is_valid_at(now) {
            error!("Electricity price data is stale!");
            bail!(
                "Price table is valid from {} until {}, not at {}",
                self.valid_from,
                self.valid_until,
                now
            );
        }

        let key_time = Time::from_hms(now.hour(), 0, 0)?;
        let key = PrimitiveDateTime::new(now.date(), key_time);

        self.hourly_price
            .get(&key)
            .copied()
            .ok_or_else(|| anyhow!("No electricity price for the hour starting {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn table() -> HourlyElectricityPrice {
        serde_json::from_str(
            r#"{
                "valid_from": "2021-01-01T00:00",
                "valid_until": "2021-01-02T00:00",
                "hourly_price": {
                    "2021-01-01T11:00": 0.08,
                    "2021-01-01T12:00": -0.02
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_price_for_hour() {
        let prices = table();
        let price = prices.current_price(datetime!(2021-01-01 12:45)).unwrap();
        assert_eq!(price, ElectricityPrice::new(-0.02));

        let price = prices.current_price(datetime!(2021-01-01 11:00)).unwrap();
        assert_eq!(price, ElectricityPrice::new(0.08));
    }

    #[test]
    fn test_missing_hour() {
        let result = table().current_price(datetime!(2021-01-01 13:00));
        assert!(result.is_err(), "{:?}", result);
    }

    #[test]
    fn test_stale_table() {
        let prices = table();
        assert!(!prices.is_valid_at(datetime!(2021-01-02 00:00)));
        assert!(prices.current_price(datetime!(2021-01-02 12:00)).is_err());
        assert!(prices.is_valid_at(datetime!(2021-01-01 00:00)));
    }

    #[test]
    fn test_same_hour_twice_is_rejected() {
        let result = serde_json::from_str::<HourlyElectricityPrice>(
            r#"{
                "valid_from": "2021-01-01T00:00",
                "valid_until": "2021-01-02T00:00",
                "hourly_price": {
                    "2021-01-01T12:00": 0.10,
                    "2021-01-01T12:00:00": 0.30
                }
            }"#,
        );
        assert!(result.is_err(), "{:?}", result);
    }

    #[test]
    fn test_bad_hour_key_is_rejected() {
        let result = serde_json::from_str::<HourlyElectricityPrice>(
            r#"{
                "valid_from": "2021-01-01T00:00",
                "valid_until": "2021-01-02T00:00",
                "hourly_price": { "noon": 0.10 }
            }"#,
        );
        assert!(result.is_err(), "{:?}", result);
    }
}
