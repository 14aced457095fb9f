//! Configuration types for the dynamic-DNS sync system
//!
//! Plain serde structs with field defaults; embedders deserialize them
//! from whatever format their entry point uses and call `validate()`
//! before wiring components together.

use serde::{Deserialize, Serialize};

use crate::traits::IpVersion;

/// Default seconds between IP detection polls
const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Default minimum seconds between full zone refreshes
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// IP address poller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Seconds between polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Address family to track
    #[serde(default = "default_ip_version")]
    pub ip_version: ConfigIpVersion,
}

impl PollerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(crate::Error::config("poll_interval_secs must be > 0"));
        }
        Ok(())
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            ip_version: default_ip_version(),
        }
    }
}

/// Caching backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Minimum seconds between full zone refreshes (token-bucket refill
    /// interval)
    #[serde(default = "default_refresh_interval_secs")]
    pub min_refresh_interval_secs: u64,
}

impl BackendConfig {
    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_refresh_interval_secs == 0 {
            return Err(crate::Error::config(
                "min_refresh_interval_secs must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            min_refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

/// Serializable IP version selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigIpVersion {
    V4,
    V6,
}

impl From<ConfigIpVersion> for IpVersion {
    fn from(version: ConfigIpVersion) -> Self {
        match version {
            ConfigIpVersion::V4 => IpVersion::V4,
            ConfigIpVersion::V6 => IpVersion::V6,
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_ip_version() -> ConfigIpVersion {
    ConfigIpVersion::V4
}
