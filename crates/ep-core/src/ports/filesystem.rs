use std::path::Path;

use async_trait::async_trait;

/// Host filesystem operations used while provisioning.
///
/// # Behavior
/// - `write_file()` replaces existing content and creates missing parents.
/// - `create_dir_all()` succeeds when the directory already exists.
/// - `remove_dir_all()` is only called for paths that exist.
#[async_trait]
pub trait HostFilesystemPort: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    async fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> anyhow::Result<()>;

    async fn create_dir_all(&self, path: &Path) -> anyhow::Result<()>;

    async fn set_mode(&self, path: &Path, mode: u32) -> anyhow::Result<()>;

    /// Change the owning user, leaving the group untouched.
    async fn chown_user(&self, path: &Path, uid: u32) -> anyhow::Result<()>;

    async fn remove_dir_all(&self, path: &Path) -> anyhow::Result<()>;
}
