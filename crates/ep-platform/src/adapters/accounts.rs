//! User and group management through shadow-utils.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use ep_core::ports::UserAccountPort;
use tracing::{debug, info};

use crate::runner::{CommandError, CommandRunner, CommandSpec};

/// `getent` exit status for "key not found in database".
const GETENT_NOT_FOUND: i32 = 2;

pub struct ShadowUserAccounts {
    runner: Arc<dyn CommandRunner>,
}

impl ShadowUserAccounts {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    async fn getent(&self, database: &str, key: &str) -> anyhow::Result<bool> {
        let spec = CommandSpec::new("getent").args([database, key]);
        match self.runner.run(&spec).await {
            Ok(_) => Ok(true),
            Err(err @ CommandError::Failed { .. }) if err.exit_code() == Some(GETENT_NOT_FOUND) => {
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl UserAccountPort for ShadowUserAccounts {
    async fn ensure_group(&self, group: &str) -> anyhow::Result<()> {
        if self.getent("group", group).await? {
            debug!(%group, "group already exists");
            return Ok(());
        }
        self.runner
            .run(&CommandSpec::new("groupadd").args(["--system", group]))
            .await?;
        info!(%group, "created group");
        Ok(())
    }

    async fn user_exists(&self, user: &str) -> anyhow::Result<bool> {
        self.getent("passwd", user).await
    }

    async fn add_user(&self, user: &str) -> anyhow::Result<()> {
        self.runner
            .run(&CommandSpec::new("useradd").args([
                "--system",
                "--no-create-home",
                "--shell",
                "/usr/sbin/nologin",
                user,
            ]))
            .await?;
        Ok(())
    }

    async fn add_user_to_group(&self, user: &str, group: &str) -> anyhow::Result<()> {
        self.runner
            .run(&CommandSpec::new("usermod").args(["--append", "--groups", group, user]))
            .await?;
        Ok(())
    }

    async fn uid_of(&self, user: &str) -> anyhow::Result<u32> {
        let output = self
            .runner
            .run(&CommandSpec::new("id").args(["-u", user]))
            .await?;
        output
            .stdout
            .trim()
            .parse()
            .with_context(|| format!("unexpected uid for {user}: {:?}", output.stdout))
    }
}
