//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AgentConfig DTO / 将 TOML 解析为 AgentConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! [`load_config`] accepts whatever is in the file. [`resolve_config`] picks
//! the file and fills keys the operator left out with the system defaults;
//! the port range is still only checked by the config store.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ep_core::AgentConfig;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/etcd-proxy-agent/agent.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AgentConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AgentConfig::from_toml(&toml_value)
}

/// Configuration for this invocation.
///
/// - An explicit path must exist.
/// - Without one, [`DEFAULT_CONFIG_PATH`] is used when present, the system
///   defaults otherwise.
/// - Empty paths and an unset port (0) take the system default values.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AgentConfig> {
    let loaded = match explicit {
        Some(path) => load_config(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(&default_path)?
            } else {
                return Ok(AgentConfig::with_system_defaults());
            }
        }
    };
    Ok(fill_unset(loaded, AgentConfig::with_system_defaults()))
}

fn fill_unset(config: AgentConfig, defaults: AgentConfig) -> AgentConfig {
    let or_default = |value: PathBuf, default: PathBuf| {
        if value.as_os_str().is_empty() {
            default
        } else {
            value
        }
    };

    AgentConfig {
        port: if config.port == 0 {
            defaults.port
        } else {
            config.port
        },
        state_dir: or_default(config.state_dir, defaults.state_dir),
        peer_data_path: or_default(config.peer_data_path, defaults.peer_data_path),
        log_dir: or_default(config.log_dir, defaults.log_dir),
        artifacts_dir: config.artifacts_dir,
    }
}
