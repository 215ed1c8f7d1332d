//! Debian package manager adapter.

use std::sync::Arc;

use async_trait::async_trait;
use ep_core::ports::PackageManagerPort;
use tracing::info;

use crate::runner::{CommandRunner, CommandSpec};

pub struct AptPackageManager {
    runner: Arc<dyn CommandRunner>,
}

impl AptPackageManager {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn apt_get(&self) -> CommandSpec {
        CommandSpec::new("apt-get").env("DEBIAN_FRONTEND", "noninteractive")
    }
}

#[async_trait]
impl PackageManagerPort for AptPackageManager {
    async fn update(&self) -> anyhow::Result<()> {
        self.runner.run(&self.apt_get().arg("update")).await?;
        info!("package index updated");
        Ok(())
    }

    async fn install(&self, packages: &[String]) -> anyhow::Result<()> {
        let spec = self
            .apt_get()
            .args(["install", "-y", "--option=Dpkg::Options::=--force-confold"])
            .args(packages.iter().cloned());
        self.runner.run(&spec).await?;
        Ok(())
    }
}
