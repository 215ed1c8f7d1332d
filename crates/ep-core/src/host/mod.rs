//! Host environment facts.
//!
//! Facts are probed fresh on every invocation and never persisted.

use serde::{Deserialize, Serialize};

/// The one release whose archive ships a usable etcd package.
pub const LEGACY_PACKAGE_RELEASE: &str = "xenial";

/// Last release booting with upstart instead of systemd.
pub const UPSTART_RELEASE: &str = "trusty";

/// Service manager flavour a unit definition is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitVariant {
    Systemd,
    Upstart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFacts {
    /// Distribution codename, e.g. `xenial`. Empty when it cannot be determined.
    pub codename: String,
}

impl HostFacts {
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
        }
    }

    pub fn init_variant(&self) -> InitVariant {
        if self.codename == UPSTART_RELEASE {
            InitVariant::Upstart
        } else {
            InitVariant::Systemd
        }
    }

    /// Whether the distro package may stand in for missing artifacts.
    pub fn has_package_fallback(&self) -> bool {
        self.codename == LEGACY_PACKAGE_RELEASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusty_uses_upstart() {
        assert_eq!(HostFacts::new("trusty").init_variant(), InitVariant::Upstart);
    }

    #[test]
    fn other_releases_use_systemd() {
        assert_eq!(HostFacts::new("xenial").init_variant(), InitVariant::Systemd);
        assert_eq!(HostFacts::new("jammy").init_variant(), InitVariant::Systemd);
        assert_eq!(HostFacts::new("").init_variant(), InitVariant::Systemd);
    }

    #[test]
    fn only_xenial_has_package_fallback() {
        assert!(HostFacts::new("xenial").has_package_fallback());
        assert!(!HostFacts::new("bionic").has_package_fallback());
        assert!(!HostFacts::new("trusty").has_package_fallback());
    }
}
