use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("port {0} is outside 1-65535")]
    InvalidPort(i64),
}

/// A TCP port in the range 1-65535.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct ListenPort(u16);

impl ListenPort {
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        match u16::try_from(value) {
            Ok(port) if port != 0 => Ok(Self(port)),
            _ => Err(ConfigError::InvalidPort(value)),
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for ListenPort {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListenPort> for u16 {
    fn from(port: ListenPort) -> Self {
        port.0
    }
}

impl fmt::Display for ListenPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of declared configuration for one invocation.
///
/// `previous_port` is the port applied by the last successful configure run,
/// or `None` when no port was ever applied on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesiredConfig {
    pub port: ListenPort,
    pub previous_port: Option<ListenPort>,
}

impl DesiredConfig {
    pub fn new(port: ListenPort, previous_port: Option<ListenPort>) -> Self {
        Self {
            port,
            previous_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_port_rejects_zero_and_overflow() {
        assert_eq!(ListenPort::new(0), Err(ConfigError::InvalidPort(0)));
        assert_eq!(ListenPort::new(65536), Err(ConfigError::InvalidPort(65536)));
        assert_eq!(ListenPort::new(-1), Err(ConfigError::InvalidPort(-1)));
    }

    #[test]
    fn listen_port_accepts_bounds() {
        assert_eq!(ListenPort::new(1).unwrap().get(), 1);
        assert_eq!(ListenPort::new(65535).unwrap().get(), 65535);
    }

    #[test]
    fn listen_port_deserialize_validates() {
        let ok: ListenPort = serde_json::from_str("2379").unwrap();
        assert_eq!(ok.get(), 2379);

        assert!(serde_json::from_str::<ListenPort>("0").is_err());
    }
}
