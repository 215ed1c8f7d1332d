//! Mock implementations of host ports for unit tests.
//!
//! Multi-step scenarios use the recording fakes under `tests/support`
//! instead; these are for checking one use case's calls in isolation.

use std::path::Path;

use async_trait::async_trait;
use ep_core::ports::{
    FirewallPort, HostFilesystemPort, PackageManagerPort, PeerRelationPort, ServiceManagerPort,
    UserAccountPort,
};
use ep_core::{ClientCredentials, ListenPort};
use mockall::mock;

mock! {
    pub Fs {}

    #[async_trait]
    impl HostFilesystemPort for Fs {
        async fn exists(&self, path: &Path) -> bool;
        async fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> anyhow::Result<()>;
        async fn create_dir_all(&self, path: &Path) -> anyhow::Result<()>;
        async fn set_mode(&self, path: &Path, mode: u32) -> anyhow::Result<()>;
        async fn chown_user(&self, path: &Path, uid: u32) -> anyhow::Result<()>;
        async fn remove_dir_all(&self, path: &Path) -> anyhow::Result<()>;
    }
}

mock! {
    pub Services {}

    #[async_trait]
    impl ServiceManagerPort for Services {
        async fn stop(&self, service: &str) -> anyhow::Result<()>;
        async fn restart(&self, service: &str) -> anyhow::Result<()>;
        async fn enable(&self, service: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub Accounts {}

    #[async_trait]
    impl UserAccountPort for Accounts {
        async fn ensure_group(&self, group: &str) -> anyhow::Result<()>;
        async fn user_exists(&self, user: &str) -> anyhow::Result<bool>;
        async fn add_user(&self, user: &str) -> anyhow::Result<()>;
        async fn add_user_to_group(&self, user: &str, group: &str) -> anyhow::Result<()>;
        async fn uid_of(&self, user: &str) -> anyhow::Result<u32>;
    }
}

mock! {
    pub Firewall {}

    #[async_trait]
    impl FirewallPort for Firewall {
        async fn open_port(&self, port: ListenPort) -> anyhow::Result<()>;
        async fn close_port(&self, port: ListenPort) -> anyhow::Result<()>;
    }
}

mock! {
    pub Packages {}

    #[async_trait]
    impl PackageManagerPort for Packages {
        async fn update(&self) -> anyhow::Result<()>;
        async fn install(&self, packages: &[String]) -> anyhow::Result<()>;
    }
}

mock! {
    pub Peer {}

    #[async_trait]
    impl PeerRelationPort for Peer {
        async fn client_credentials(&self) -> anyhow::Result<ClientCredentials>;
        async fn get_remote(&self, key: &str) -> anyhow::Result<Option<String>>;
    }
}
