//! Use case for the dedicated service account and its data directory.

use std::sync::Arc;

use ep_core::ports::{HostFilesystemPort, UserAccountPort};
use ep_core::ServiceLayout;
use tracing::{debug, info};

/// Ensures the service user/group exist and own the data directory.
///
/// Every step tolerates state left behind by an earlier run.
pub struct EnsureServiceAccount {
    accounts: Arc<dyn UserAccountPort>,
    fs: Arc<dyn HostFilesystemPort>,
    layout: ServiceLayout,
}

impl EnsureServiceAccount {
    pub fn new(
        accounts: Arc<dyn UserAccountPort>,
        fs: Arc<dyn HostFilesystemPort>,
        layout: ServiceLayout,
    ) -> Self {
        Self {
            accounts,
            fs,
            layout,
        }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let ServiceLayout {
            user,
            group,
            data_dir,
            ..
        } = &self.layout;

        self.accounts.ensure_group(group).await?;

        if self.accounts.user_exists(user).await? {
            debug!(%user, "service user already exists");
        } else {
            self.accounts.add_user(user).await?;
            self.accounts.add_user_to_group(user, group).await?;
            info!(%user, %group, "created service user");
        }

        self.fs.create_dir_all(data_dir).await?;
        self.fs
            .set_mode(data_dir, ServiceLayout::DATA_DIR_MODE)
            .await?;
        let uid = self.accounts.uid_of(user).await?;
        self.fs.chown_user(data_dir, uid).await?;
        debug!(path = %data_dir.display(), uid, "data directory ready");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockAccounts, MockFs};
    use mockall::Sequence;
    use std::path::Path;

    fn data_dir_fs() -> MockFs {
        let mut fs = MockFs::new();
        let mut seq = Sequence::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("/var/lib/etcd"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_set_mode()
            .withf(|path, mode| path == Path::new("/var/lib/etcd") && *mode == 0o775)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_chown_user()
            .withf(|path, uid| path == Path::new("/var/lib/etcd") && *uid == 998)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs
    }

    #[tokio::test]
    async fn creates_user_when_missing() {
        let mut accounts = MockAccounts::new();
        accounts
            .expect_ensure_group()
            .withf(|name: &str| name == "etcd")
            .times(1)
            .returning(|_| Ok(()));
        accounts.expect_user_exists().returning(|_| Ok(false));
        accounts
            .expect_add_user()
            .withf(|name: &str| name == "etcd")
            .times(1)
            .returning(|_| Ok(()));
        accounts
            .expect_add_user_to_group()
            .withf(|user: &str, group: &str| user == "etcd" && group == "etcd")
            .times(1)
            .returning(|_, _| Ok(()));
        accounts.expect_uid_of().returning(|_| Ok(998));
        let use_case = EnsureServiceAccount::new(
            Arc::new(accounts),
            Arc::new(data_dir_fs()),
            ServiceLayout::standard(),
        );

        use_case.execute().await.unwrap();
    }

    #[tokio::test]
    async fn existing_user_is_left_alone() {
        let mut accounts = MockAccounts::new();
        accounts.expect_ensure_group().returning(|_| Ok(()));
        accounts.expect_user_exists().returning(|_| Ok(true));
        accounts.expect_add_user().never();
        accounts.expect_add_user_to_group().never();
        accounts.expect_uid_of().returning(|_| Ok(998));
        let use_case = EnsureServiceAccount::new(
            Arc::new(accounts),
            Arc::new(data_dir_fs()),
            ServiceLayout::standard(),
        );

        use_case.execute().await.unwrap();
    }

    #[tokio::test]
    async fn group_failure_stops_before_touching_disk() {
        let mut accounts = MockAccounts::new();
        accounts
            .expect_ensure_group()
            .returning(|_| Err(anyhow::anyhow!("groupadd exited with 10")));
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().never();
        let use_case =
            EnsureServiceAccount::new(Arc::new(accounts), Arc::new(fs), ServiceLayout::standard());

        assert!(use_case.execute().await.is_err());
    }
}
