use ep_core::ports::ArtifactSourceError;

/// Errors that abort the install phase. `installed` is never set when one of
/// these is returned, so the next trigger retries from the start.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("provisioning state unavailable: {0}")]
    State(#[source] anyhow::Error),
    #[error("host facts probe failed: {0}")]
    HostFacts(#[source] anyhow::Error),
    #[error("artifact resolution failed: {0}")]
    Artifact(#[from] ArtifactSourceError),
    #[error("installing binaries failed: {0}")]
    Binaries(#[source] anyhow::Error),
    #[error("package fallback failed: {0}")]
    Package(#[source] anyhow::Error),
    #[error("package state normalization failed: {0}")]
    Normalize(#[source] anyhow::Error),
    #[error("service account setup failed: {0}")]
    ServiceAccount(#[source] anyhow::Error),
    #[error("service unit setup failed: {0}")]
    ServiceUnit(#[source] anyhow::Error),
}

/// Errors that abort the configure phase. The next trigger re-runs every step.
#[derive(Debug, thiserror::Error)]
pub enum ConfigureError {
    #[error("provisioning state unavailable: {0}")]
    State(#[source] anyhow::Error),
    #[error("declared configuration unusable: {0}")]
    Config(#[source] anyhow::Error),
    #[error("credential provisioning failed: {0}")]
    Credentials(#[source] anyhow::Error),
    #[error("reading peer data failed: {0}")]
    Peer(#[source] anyhow::Error),
    #[error("rendering service defaults failed: {0}")]
    Render(#[source] anyhow::Error),
    #[error("port reconciliation failed: {0}")]
    Ports(#[source] anyhow::Error),
    #[error("service restart failed: {0}")]
    Restart(#[source] anyhow::Error),
    #[error("recording applied configuration failed: {0}")]
    Commit(#[source] anyhow::Error),
}
