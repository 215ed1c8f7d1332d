//! # Platform Adapters / 平台适配器
//!
//! Host implementations of the `ep-core` ports.
//!
//! # Modules / 模块
//!
//! - `apt` - Debian package manager
//! - `accounts` - Shadow-utils user and group management
//! - `filesystem` - Local filesystem with unix modes and ownership
//! - `hook_tools` - Host runtime tools (`resource-get`, `open-port`, `status-set`)
//! - `lsb_release` - Distribution codename probe
//! - `service` - Service supervisor (`service`, `systemctl`)

pub mod accounts;
pub mod apt;
pub mod filesystem;
pub mod hook_tools;
pub mod lsb_release;
pub mod service;

pub use accounts::ShadowUserAccounts;
pub use apt::AptPackageManager;
pub use filesystem::LocalFilesystem;
pub use hook_tools::{HookToolArtifactSource, HookToolFirewall, HookToolStatusReporter};
pub use lsb_release::LsbReleaseProbe;
pub use service::SystemServiceManager;
