//! Distribution codename probe.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use ep_core::ports::HostFactsPort;
use ep_core::HostFacts;
use tokio::fs;
use tracing::{debug, warn};

/// Reads `DISTRIB_CODENAME` from `/etc/lsb-release`, falling back to
/// `VERSION_CODENAME` in `/etc/os-release`.
pub struct LsbReleaseProbe {
    lsb_release: PathBuf,
    os_release: PathBuf,
}

impl LsbReleaseProbe {
    pub fn new(lsb_release: PathBuf, os_release: PathBuf) -> Self {
        Self {
            lsb_release,
            os_release,
        }
    }

    pub fn system() -> Self {
        Self::new("/etc/lsb-release".into(), "/etc/os-release".into())
    }

    async fn read_key(path: &Path, key: &str) -> anyhow::Result<Option<String>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err).with_context(|| format!("Failed to read {}", path.display())),
        };
        Ok(parse_key(&content, key))
    }
}

impl Default for LsbReleaseProbe {
    fn default() -> Self {
        Self::system()
    }
}

/// Value of `key` in a shell-style `KEY=value` file, unquoted.
fn parse_key(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (k, v) = line.trim().split_once('=')?;
        if k.trim() != key {
            return None;
        }
        let value = v.trim().trim_matches(|c: char| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[async_trait]
impl HostFactsPort for LsbReleaseProbe {
    async fn probe(&self) -> anyhow::Result<HostFacts> {
        let codename = match Self::read_key(&self.lsb_release, "DISTRIB_CODENAME").await? {
            Some(codename) => codename,
            None => match Self::read_key(&self.os_release, "VERSION_CODENAME").await? {
                Some(codename) => codename,
                None => {
                    warn!("distribution codename unknown; assuming a modern systemd host");
                    String::new()
                }
            },
        };
        debug!(%codename, "host facts probed");
        Ok(HostFacts::new(codename))
    }
}
