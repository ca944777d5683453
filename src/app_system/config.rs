use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const ENV_CHANNEL_BUFFER: &str = "CLINIC_CHANNEL_BUFFER";
pub const ENV_LOGIN_LATENCY_MS: &str = "CLINIC_LOGIN_LATENCY_MS";
pub const ENV_SEED_SAMPLE_DATA: &str = "CLINIC_SEED_SAMPLE_DATA";
pub const ENV_LOG_FILTER: &str = "CLINIC_LOG_FILTER";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("channel_buffer must be at least 1")]
    ZeroChannelBuffer,
}

/// Runtime settings for a ClinicSystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    /// Simulated round-trip delay applied to every login.
    pub login_latency_ms: u64,
    /// Load the fixed sample users, patients, appointments and records at startup.
    pub seed_sample_data: bool,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            login_latency_ms: 500,
            seed_sample_data: true,
            log_filter: "info".to_string(),
        }
    }
}

impl ClinicConfig {
    /// Defaults overridden by any `CLINIC_*` environment variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClinicConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(buffer) = parse_var(&lookup, ENV_CHANNEL_BUFFER)? {
            config.channel_buffer = buffer;
        }
        if let Some(latency) = parse_var(&lookup, ENV_LOGIN_LATENCY_MS)? {
            config.login_latency_ms = latency;
        }
        if let Some(seed) = parse_var(&lookup, ENV_SEED_SAMPLE_DATA)? {
            config.seed_sample_data = seed;
        }
        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
