use std::convert::TryFrom;
use std::env;

use thiserror::Error;

use crate::poller::PollPolicy;
use crate::registers::ADDR_BME280;

pub const ENV_BUS: &str = "RPBME280_I2C_BUS";
pub const ENV_ADDR: &str = "RPBME280_I2C_ADDR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Session settings. The sampling profile itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bus: u8,
    pub address: u16,
    pub poll: PollPolicy,
    /// Issue a soft reset before reading calibration.
    pub soft_reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bus: 1,
            address: ADDR_BME280,
            poll: PollPolicy::default(),
            soft_reset: false,
        }
    }
}

impl Config {
    /// Defaults, overridden by `RPBME280_I2C_BUS` and `RPBME280_I2C_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_BUS) {
            config.bus = parse_int(&value)
                .and_then(|v| u8::try_from(v).ok())
                .ok_or(ConfigError::Invalid {
                    name: ENV_BUS,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_ADDR) {
            config.address = parse_int(&value)
                .filter(|&v| v <= 0x7F)
                .map(|v| v as u16)
                .ok_or(ConfigError::Invalid {
                    name: ENV_ADDR,
                    value,
                })?;
        }

        Ok(config)
    }
}

/// Decimal, or hex with a `0x` prefix.
fn parse_int(s: &str) -> Option<u32> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}
