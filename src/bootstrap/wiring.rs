//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (state file, config store) / 创建 infra 层具体实现
//! - ✅ Create platform implementations (commands, filesystem) / 创建 platform 层具体实现
//! - ✅ Group them into [`AgentDeps`] / 将所有依赖组装为 AgentDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on ep-infra + ep-platform + ep-app simultaneously.**
//! > **这是唯一允许同时依赖 ep-infra、ep-platform 和 ep-app 的地方。**

use std::sync::Arc;

use ep_app::AgentDeps;
use ep_core::ports::ArtifactSourcePort;
use ep_core::{AgentConfig, ServiceLayout};
use ep_infra::{DirectoryArtifactSource, FileConfigStore, FileProvisioningStateRepository};
use ep_platform::adapters::{
    AptPackageManager, HookToolArtifactSource, HookToolFirewall, HookToolStatusReporter,
    LocalFilesystem, LsbReleaseProbe, ShadowUserAccounts, SystemServiceManager,
};
use ep_platform::CommandRunner;

/// Assemble the production adapters for `config`.
///
/// Every host command goes through `runner`.
pub fn wire_dependencies(config: &AgentConfig, runner: Arc<dyn CommandRunner>) -> AgentDeps {
    AgentDeps {
        state: Arc::new(FileProvisioningStateRepository::with_defaults(
            &config.state_dir,
        )),
        config: Arc::new(FileConfigStore::with_defaults(config.port, &config.state_dir)),
        host_facts: Arc::new(LsbReleaseProbe::system()),
        fs: Arc::new(LocalFilesystem::new()),
        artifacts: artifact_source(config, runner.clone()),
        packages: Arc::new(AptPackageManager::new(runner.clone())),
        services: Arc::new(SystemServiceManager::new(runner.clone())),
        accounts: Arc::new(ShadowUserAccounts::new(runner.clone())),
        firewall: Arc::new(HookToolFirewall::new(runner.clone())),
        status: Arc::new(HookToolStatusReporter::new(runner)),
        layout: ServiceLayout::standard(),
    }
}

fn artifact_source(
    config: &AgentConfig,
    runner: Arc<dyn CommandRunner>,
) -> Arc<dyn ArtifactSourcePort> {
    match &config.artifacts_dir {
        Some(dir) => Arc::new(DirectoryArtifactSource::new(dir.clone())),
        None => Arc::new(HookToolArtifactSource::new(runner)),
    }
}
