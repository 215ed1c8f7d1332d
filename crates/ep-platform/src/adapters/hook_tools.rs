//! Adapters over the host runtime's hook tools.
//!
//! The runtime exposes `resource-get`, `open-port`, `close-port` and
//! `status-set` as executables on `PATH` while a trigger is being handled.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use ep_core::ports::{
    Artifact, ArtifactLookup, ArtifactSourceError, ArtifactSourcePort, FirewallPort, StatusPort,
};
use ep_core::{ListenPort, WorkloadStatus};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::runner::{CommandError, CommandRunner, CommandSpec};

/// Resolves artifacts through `resource-get <name>`, which prints the local
/// path of the attached file.
pub struct HookToolArtifactSource {
    runner: Arc<dyn CommandRunner>,
}

impl HookToolArtifactSource {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ArtifactSourcePort for HookToolArtifactSource {
    async fn fetch(&self, name: &str) -> Result<ArtifactLookup, ArtifactSourceError> {
        let spec = CommandSpec::new("resource-get").arg(name);
        let output = match self.runner.run(&spec).await {
            Ok(output) => output,
            Err(CommandError::NotFound { program }) => {
                return Err(ArtifactSourceError::CapabilityUnavailable(format!(
                    "{program} is not available"
                )))
            }
            Err(err @ CommandError::Failed { .. }) => {
                info!(artifact = name, error = %err, "artifact not attached");
                return Ok(ArtifactLookup::Missing);
            }
            Err(err) => {
                return Err(ArtifactSourceError::Read {
                    name: name.to_string(),
                    reason: err.to_string(),
                })
            }
        };

        let path = PathBuf::from(output.stdout.trim());
        if path.as_os_str().is_empty() {
            return Ok(ArtifactLookup::Missing);
        }

        match fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => {
                debug!(artifact = name, path = %path.display(), "attached artifact is empty");
                Ok(ArtifactLookup::Missing)
            }
            Ok(bytes) => Ok(ArtifactLookup::Ready(Artifact {
                name: name.to_string(),
                bytes,
            })),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(ArtifactLookup::Missing),
            Err(err) => Err(ArtifactSourceError::Read {
                name: name.to_string(),
                reason: format!("{}: {err}", path.display()),
            }),
        }
    }
}

/// Opens and closes TCP ports with `open-port` / `close-port`.
pub struct HookToolFirewall {
    runner: Arc<dyn CommandRunner>,
}

impl HookToolFirewall {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    async fn port_tool(&self, tool: &str, port: ListenPort) -> anyhow::Result<()> {
        self.runner
            .run(&CommandSpec::new(tool).arg(format!("{port}/tcp")))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl FirewallPort for HookToolFirewall {
    async fn open_port(&self, port: ListenPort) -> anyhow::Result<()> {
        self.port_tool("open-port", port).await
    }

    async fn close_port(&self, port: ListenPort) -> anyhow::Result<()> {
        self.port_tool("close-port", port).await
    }
}

/// Reports workload status with `status-set <kind> <message>`.
///
/// Outside a hook context the tool is missing; the status is then only logged.
pub struct HookToolStatusReporter {
    runner: Arc<dyn CommandRunner>,
}

impl HookToolStatusReporter {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl StatusPort for HookToolStatusReporter {
    async fn set_status(&self, status: WorkloadStatus) -> anyhow::Result<()> {
        info!(kind = %status.kind, message = %status.message, "workload status");
        let spec = CommandSpec::new("status-set").args([status.kind.as_str(), status.message.as_str()]);
        match self.runner.run(&spec).await {
            Ok(_) => Ok(()),
            Err(CommandError::NotFound { .. }) => {
                warn!("status-set unavailable; status recorded in log only");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
