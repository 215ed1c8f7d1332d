//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define agent configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic in [`AgentConfig`] / 禁止验证逻辑**
//!
//! Port range checks live in [`ListenPort`], which is only built when the
//! config store takes a [`DesiredConfig`] snapshot.

mod desired;

pub use desired::{ConfigError, DesiredConfig, ListenPort};

use std::path::PathBuf;

/// Port etcd clients use unless the operator configures another one.
pub const DEFAULT_CLIENT_PORT: i64 = 2379;

/// Agent configuration DTO (pure data, no logic)
/// 代理配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Declared client port. Raw value from the file, range is not checked here.
    pub port: i64,

    /// Directory holding the marker file and the applied-config snapshot.
    pub state_dir: PathBuf,

    /// JSON document the host runtime drops when the TLS peer is available.
    pub peer_data_path: PathBuf,

    /// Directory for the rolling log file (may be empty: stdout only).
    pub log_dir: PathBuf,

    /// Optional local directory serving install artifacts by name.
    /// When absent the host runtime resource tool is used.
    pub artifacts_dir: Option<PathBuf>,
}

impl AgentConfig {
    /// Create AgentConfig from TOML value
    /// 从 TOML 值创建 AgentConfig
    ///
    /// Missing keys become empty values; they are facts, not errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let paths = toml_value.get("paths");
        let path_of = |key: &str| {
            PathBuf::from(
                paths
                    .and_then(|p| p.get(key))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            )
        };

        Ok(Self {
            port: toml_value
                .get("service")
                .and_then(|s| s.get("port"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0),
            state_dir: path_of("state_dir"),
            peer_data_path: path_of("peer_data"),
            log_dir: path_of("log_dir"),
            artifacts_dir: paths
                .and_then(|p| p.get("artifacts_dir"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
        })
    }

    /// Configuration used when no file is present on the host.
    pub fn with_system_defaults() -> Self {
        let state_dir = PathBuf::from("/var/lib/etcd-proxy-agent");
        Self {
            port: DEFAULT_CLIENT_PORT,
            peer_data_path: state_dir.join("peer.json"),
            state_dir,
            log_dir: PathBuf::from("/var/log/etcd-proxy-agent"),
            artifacts_dir: None,
        }
    }
}
