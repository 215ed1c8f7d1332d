use async_trait::async_trait;

use crate::service::ClientCredentials;

/// Channel to the remote node that supplies TLS material and cluster
/// membership. The channel itself is trusted.
#[async_trait]
pub trait PeerRelationPort: Send + Sync {
    async fn client_credentials(&self) -> anyhow::Result<ClientCredentials>;

    /// Raw value published by the peer under `key`, if any.
    async fn get_remote(&self, key: &str) -> anyhow::Result<Option<String>>;
}
