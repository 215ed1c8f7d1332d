//! Service supervisor adapter.
//!
//! `stop` and `restart` go through the `service` wrapper, which dispatches to
//! systemd or upstart. Boot registration only exists for systemd.

use std::sync::Arc;

use async_trait::async_trait;
use ep_core::ports::ServiceManagerPort;
use tracing::info;

use crate::runner::{CommandRunner, CommandSpec};

pub struct SystemServiceManager {
    runner: Arc<dyn CommandRunner>,
}

impl SystemServiceManager {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    async fn service(&self, name: &str, action: &str) -> anyhow::Result<()> {
        self.runner
            .run(&CommandSpec::new("service").args([name, action]))
            .await?;
        info!(service = name, action, "service action complete");
        Ok(())
    }
}

#[async_trait]
impl ServiceManagerPort for SystemServiceManager {
    async fn stop(&self, service: &str) -> anyhow::Result<()> {
        self.service(service, "stop").await
    }

    async fn restart(&self, service: &str) -> anyhow::Result<()> {
        self.service(service, "restart").await
    }

    async fn enable(&self, service: &str) -> anyhow::Result<()> {
        self.runner
            .run(&CommandSpec::new("systemctl").args(["enable", service]))
            .await?;
        Ok(())
    }
}
