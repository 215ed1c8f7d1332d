use async_trait::async_trait;

use crate::host::HostFacts;

#[async_trait]
pub trait HostFactsPort: Send + Sync {
    async fn probe(&self) -> anyhow::Result<HostFacts>;
}
