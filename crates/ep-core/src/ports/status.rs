use async_trait::async_trait;

use crate::status::WorkloadStatus;

#[async_trait]
pub trait StatusPort: Send + Sync {
    async fn set_status(&self, status: WorkloadStatus) -> anyhow::Result<()>;
}
