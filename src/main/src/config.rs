use control::{CoreConfig, ElectricityPrice, Energy, InputError, Temperature, TemperatureRange};

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default(0.15)]
    price_threshold: f64,
    #[default(20.0)]
    minimum_temperature: f64,
    #[default(25.0)]
    maximum_temperature: f64,
    #[default(100.0)]
    energy_usage_limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    // Fallbacks for snapshots that leave the household settings out
    pub defaults: CoreConfig,
}

impl Config {
    pub fn read() -> Result<Self, InputError> {
        Config::try_from(TOML_CONFIG)
    }
}

impl TryFrom<TomlConfig> for Config {
    type Error = InputError;

    fn try_from(config: TomlConfig) -> Result<Self, InputError> {
        let defaults = CoreConfig {
            price_threshold: ElectricityPrice::new(config.price_threshold),
            desired_temperature: TemperatureRange::new(
                Temperature::new(config.minimum_temperature),
                Temperature::new(config.maximum_temperature),
            )?,
            energy_usage_limit: Energy::new(config.energy_usage_limit),
        };
        defaults.validate()?;
        Ok(Config { defaults })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            defaults: CoreConfig {
                price_threshold: ElectricityPrice::new(0.15),
                desired_temperature: TemperatureRange {
                    low: Temperature::new(20.0),
                    high: Temperature::new(25.0),
                },
                energy_usage_limit: Energy::new(100.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_defaults_match_default() {
        let config = TomlConfig {
            price_threshold: 0.15,
            minimum_temperature: 20.0,
            maximum_temperature: 25.0,
            energy_usage_limit: 100.0,
        };
        assert_eq!(Config::try_from(config), Ok(Config::default()));
    }

    #[test]
    fn test_inverted_temperatures_rejected() {
        let config = TomlConfig {
            price_threshold: 0.15,
            minimum_temperature: 26.0,
            maximum_temperature: 25.0,
            energy_usage_limit: 100.0,
        };
        let result = Config::try_from(config);
        assert_eq!(
            result,
            Err(InputError::InvertedTemperatureRange { low: 26.0, high: 25.0 })
        );
    }

    #[test]
    fn test_negative_limit_rejected() {
        let config = TomlConfig {
            price_threshold: 0.15,
            minimum_temperature: 20.0,
            maximum_temperature: 25.0,
            energy_usage_limit: -5.0,
        };
        assert_eq!(
            Config::try_from(config),
            Err(InputError::NegativeUsageLimit(-5.0))
        );
    }
}
