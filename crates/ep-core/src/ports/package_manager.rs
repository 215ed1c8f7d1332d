use async_trait::async_trait;

/// Distribution package manager. Every failure is fatal to the caller.
#[async_trait]
pub trait PackageManagerPort: Send + Sync {
    async fn update(&self) -> anyhow::Result<()>;
    async fn install(&self, packages: &[String]) -> anyhow::Result<()>;
}
