use async_trait::async_trait;

use crate::provisioning::ProvisioningState;

/// Durable marker storage.
///
/// `save_state()` must not return before the markers are durable.
#[async_trait]
pub trait ProvisioningStatePort: Send + Sync {
    async fn load_state(&self) -> anyhow::Result<ProvisioningState>;
    async fn save_state(&self, state: &ProvisioningState) -> anyhow::Result<()>;
}
