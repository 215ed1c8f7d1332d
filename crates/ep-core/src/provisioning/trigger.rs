use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Lifecycle events delivered by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleTrigger {
    /// The unit was asked to install.
    Install,
    /// The TLS peer relation published (or re-published) its data.
    PeerAvailable,
    /// Declared configuration changed.
    ConfigChanged,
    /// The agent or its artifacts were upgraded.
    Upgrade,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown lifecycle trigger: {0}")]
pub struct UnknownTrigger(pub String);

impl LifecycleTrigger {
    pub const ALL: [LifecycleTrigger; 4] = [
        LifecycleTrigger::Install,
        LifecycleTrigger::PeerAvailable,
        LifecycleTrigger::ConfigChanged,
        LifecycleTrigger::Upgrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleTrigger::Install => "install",
            LifecycleTrigger::PeerAvailable => "peer-available",
            LifecycleTrigger::ConfigChanged => "config-changed",
            LifecycleTrigger::Upgrade => "upgrade",
        }
    }
}

impl fmt::Display for LifecycleTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleTrigger {
    type Err = UnknownTrigger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|trigger| trigger.as_str() == s)
            .ok_or_else(|| UnknownTrigger(s.to_string()))
    }
}
