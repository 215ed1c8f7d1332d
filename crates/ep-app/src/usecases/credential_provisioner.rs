//! Use case for persisting TLS client material supplied by the peer.

use std::sync::Arc;

use ep_core::ports::{HostFilesystemPort, PeerRelationPort, UserAccountPort};
use ep_core::ServiceLayout;
use tracing::debug;

/// Writes the peer's key, certificate and CA to their fixed paths,
/// overwriting whatever an earlier trigger left there.
///
/// The key is private to the service user; the certificates stay world
/// readable.
pub struct ProvisionCredentials {
    fs: Arc<dyn HostFilesystemPort>,
    accounts: Arc<dyn UserAccountPort>,
    layout: ServiceLayout,
}

impl ProvisionCredentials {
    pub fn new(
        fs: Arc<dyn HostFilesystemPort>,
        accounts: Arc<dyn UserAccountPort>,
        layout: ServiceLayout,
    ) -> Self {
        Self {
            fs,
            accounts,
            layout,
        }
    }

    pub async fn execute(&self, peer: &dyn PeerRelationPort) -> anyhow::Result<()> {
        let credentials = peer.client_credentials().await?;
        let paths = &self.layout.credentials;

        self.fs
            .write_file(&paths.key, &credentials.key, ServiceLayout::KEY_FILE_MODE)
            .await?;
        let uid = self.accounts.uid_of(&self.layout.user).await?;
        self.fs.chown_user(&paths.key, uid).await?;
        debug!(path = %paths.key.display(), uid, "wrote private key");

        for (path, blob) in paths.certificates_with(&credentials) {
            self.fs
                .write_file(path, blob, ServiceLayout::CERTIFICATE_FILE_MODE)
                .await?;
            debug!(path = %path.display(), bytes = blob.len(), "wrote certificate");
        }
        Ok(())
    }
}
