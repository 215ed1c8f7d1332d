use ep_core::ListenPort;

use crate::usecases::PortChange;

/// Result of one `reconcile_install` invocation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The `installed` marker was already set; nothing ran.
    AlreadyInstalled,
    InstalledFromArtifacts,
    InstalledFromPackage,
    /// Install could not proceed; `installed` stays unset.
    Blocked(BlockReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The host runtime cannot supply artifacts at all.
    CapabilityUnavailable,
    /// Artifacts were not supplied and no package fallback exists.
    MissingArtifacts,
}

/// Result of one `reconcile_configure` invocation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Configured {
        port: ListenPort,
        port_change: PortChange,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotInstalled,
    PeerUnavailable,
    /// The peer has not published cluster membership yet.
    ClusterUnknown,
}

impl InstallOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, InstallOutcome::Blocked(_))
    }
}
