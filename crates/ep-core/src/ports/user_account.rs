use async_trait::async_trait;

/// OS user and group primitives.
#[async_trait]
pub trait UserAccountPort: Send + Sync {
    /// Create `group` unless it already exists.
    async fn ensure_group(&self, group: &str) -> anyhow::Result<()>;

    async fn user_exists(&self, user: &str) -> anyhow::Result<bool>;

    async fn add_user(&self, user: &str) -> anyhow::Result<()>;

    async fn add_user_to_group(&self, user: &str, group: &str) -> anyhow::Result<()>;

    async fn uid_of(&self, user: &str) -> anyhow::Result<u32>;
}
