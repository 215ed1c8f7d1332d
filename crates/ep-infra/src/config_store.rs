//! Config store backed by the agent config and an applied-config record.
//!
//! The declared port comes from the loaded [`AgentConfig`]. The port that was
//! last applied to the host is kept in a JSON file next to the provisioning
//! markers, so "previous" survives across invocations.
//!
//! [`AgentConfig`]: ep_core::AgentConfig

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ep_core::ports::ConfigStorePort;
use ep_core::{DesiredConfig, ListenPort};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::json_file;

pub const DEFAULT_APPLIED_CONFIG_FILE: &str = "applied-config.json";

#[derive(Debug, Serialize, Deserialize)]
struct AppliedConfig {
    port: ListenPort,
}

pub struct FileConfigStore {
    declared_port: i64,
    applied_path: PathBuf,
}

impl FileConfigStore {
    pub fn new(declared_port: i64, applied_path: PathBuf) -> Self {
        Self {
            declared_port,
            applied_path,
        }
    }

    pub fn with_defaults(declared_port: i64, state_dir: &Path) -> Self {
        Self::new(declared_port, state_dir.join(DEFAULT_APPLIED_CONFIG_FILE))
    }
}

#[async_trait]
impl ConfigStorePort for FileConfigStore {
    async fn snapshot(&self) -> anyhow::Result<DesiredConfig> {
        let port = ListenPort::new(self.declared_port)?;
        let previous = json_file::read_optional::<AppliedConfig>(&self.applied_path)
            .await?
            .map(|applied| applied.port);
        debug!(%port, ?previous, "config snapshot");
        Ok(DesiredConfig::new(port, previous))
    }

    async fn commit(&self, port: ListenPort) -> anyhow::Result<()> {
        json_file::write_synced(&self.applied_path, &AppliedConfig { port }).await
    }
}
