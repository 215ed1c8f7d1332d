use async_trait::async_trait;

use crate::config::{DesiredConfig, ListenPort};

/// Declared configuration, read-only to reconciliation apart from recording
/// which port was last applied.
#[async_trait]
pub trait ConfigStorePort: Send + Sync {
    /// Current declared config plus the previously applied port.
    async fn snapshot(&self) -> anyhow::Result<DesiredConfig>;

    /// Record `port` as applied so the next snapshot treats it as previous.
    async fn commit(&self, port: ListenPort) -> anyhow::Result<()>;
}
