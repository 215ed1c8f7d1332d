use async_trait::async_trait;

use crate::config::ListenPort;

/// Exposure of TCP ports through the host runtime.
#[async_trait]
pub trait FirewallPort: Send + Sync {
    async fn open_port(&self, port: ListenPort) -> anyhow::Result<()>;
    async fn close_port(&self, port: ListenPort) -> anyhow::Result<()>;
}
