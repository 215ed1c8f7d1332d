//! File-based provisioning state repository
//!
//! Persists the provisioning markers to a JSON file in the agent state
//! directory. Every save replaces the file by rename and is synced before it
//! returns, so a reader sees either the old markers or the new ones.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ep_core::ports::ProvisioningStatePort;
use ep_core::ProvisioningState;
use tracing::debug;

use crate::json_file;

pub const DEFAULT_STATE_FILE: &str = "provisioning-state.json";

pub struct FileProvisioningStateRepository {
    state_file_path: PathBuf,
}

impl FileProvisioningStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(state_dir: &Path) -> Self {
        Self::new(state_dir.join(DEFAULT_STATE_FILE))
    }
}

#[async_trait]
impl ProvisioningStatePort for FileProvisioningStateRepository {
    async fn load_state(&self) -> anyhow::Result<ProvisioningState> {
        let state = json_file::read_optional(&self.state_file_path)
            .await?
            .unwrap_or_default();
        Ok(state)
    }

    async fn save_state(&self, state: &ProvisioningState) -> anyhow::Result<()> {
        json_file::write_synced(&self.state_file_path, state).await?;
        debug!(path = %self.state_file_path.display(), ?state, "provisioning state saved");
        Ok(())
    }
}
