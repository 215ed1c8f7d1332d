use async_trait::async_trait;

/// Service supervisor operations on a named unit.
#[async_trait]
pub trait ServiceManagerPort: Send + Sync {
    async fn stop(&self, service: &str) -> anyhow::Result<()>;
    async fn restart(&self, service: &str) -> anyhow::Result<()>;
    /// Register for start on boot. May fail when already registered.
    async fn enable(&self, service: &str) -> anyhow::Result<()>;
}
