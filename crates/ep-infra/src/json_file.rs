//! Small helpers for the JSON documents kept in the state directory.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tokio::fs;

/// Read one of the agent's own documents. A missing file yields `None`.
///
/// These files are only ever replaced by rename, so a blank one is damage
/// and is reported as a parse error rather than read as "no record".
pub(crate) async fn read_optional<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    let Some(content) = read_to_string_if_present(path).await? else {
        return Ok(None);
    };
    parse(path, &content).map(Some)
}

/// Read a document another process publishes. Missing or blank files yield
/// `None`, since the publisher may not have written it yet.
pub(crate) async fn read_published<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    match read_to_string_if_present(path).await? {
        Some(content) if !content.trim().is_empty() => parse(path, &content).map(Some),
        _ => Ok(None),
    }
}

async fn read_to_string_if_present(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> anyhow::Result<T> {
    serde_json::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))
}

/// Write `value` as pretty JSON through a synced temp file renamed over
/// `path`, then sync the directory so the rename itself is durable.
pub(crate) async fn write_synced<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("{} has no parent directory", path.display()))?;
    fs::create_dir_all(parent)
        .await
        .with_context(|| format!("Failed to create {}", parent.display()))?;

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize {}: {e}", path.display()))?;

    let dir = parent.to_path_buf();
    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(json.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&target)?;
        std::fs::File::open(&dir)?.sync_all()?;
        Ok(())
    })
    .await
    .context("state write task panicked")?
    .with_context(|| format!("Failed to write {}", path.display()))
}
