//! Local filesystem adapter with unix permissions and ownership.

use std::fs::Permissions;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use ep_core::ports::HostFilesystemPort;
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostFilesystemPort for LocalFilesystem {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> anyhow::Result<()> {
        let parent = path
            .parent()
            .with_context(|| format!("{} has no parent directory", path.display()))?;
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        // Staged next to the target and renamed over it, so a running
        // executable is replaced rather than truncated in place.
        let dir = parent.to_path_buf();
        let target = path.to_path_buf();
        let bytes = contents.to_vec();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let mut staged = NamedTempFile::new_in(&dir)?;
            staged.write_all(&bytes)?;
            staged
                .as_file()
                .set_permissions(Permissions::from_mode(mode))?;
            staged.as_file().sync_all()?;
            staged.persist(&target)?;
            Ok(())
        })
        .await
        .context("write task panicked")?
        .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!(path = %path.display(), bytes = contents.len(), mode = %format!("{mode:o}"), "file written");
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))
    }

    async fn set_mode(&self, path: &Path, mode: u32) -> anyhow::Result<()> {
        fs::set_permissions(path, Permissions::from_mode(mode))
            .await
            .with_context(|| format!("Failed to chmod {:o} {}", mode, path.display()))
    }

    async fn chown_user(&self, path: &Path, uid: u32) -> anyhow::Result<()> {
        let target = path.to_path_buf();
        tokio::task::spawn_blocking(move || std::os::unix::fs::chown(&target, Some(uid), None))
            .await
            .context("chown task panicked")?
            .with_context(|| format!("Failed to chown {} to uid {uid}", path.display()))
    }

    async fn remove_dir_all(&self, path: &Path) -> anyhow::Result<()> {
        fs::remove_dir_all(path)
            .await
            .with_context(|| format!("Failed to remove {}", path.display()))
    }
}
