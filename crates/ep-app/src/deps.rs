//! # Agent Dependencies / 代理依赖
//!
//! Dependency grouping for constructing the [`ReconciliationController`].
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping
//!
//! [`ReconciliationController`]: crate::ReconciliationController

use std::sync::Arc;

use ep_core::ports::*;
use ep_core::ServiceLayout;

/// Every host capability the reconciliation use cases need.
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AgentDeps {
    // Durable state / 持久状态
    pub state: Arc<dyn ProvisioningStatePort>,
    pub config: Arc<dyn ConfigStorePort>,

    // Host inspection / 主机信息
    pub host_facts: Arc<dyn HostFactsPort>,
    pub fs: Arc<dyn HostFilesystemPort>,

    // Install sources / 安装来源
    pub artifacts: Arc<dyn ArtifactSourcePort>,
    pub packages: Arc<dyn PackageManagerPort>,

    // System management / 系统管理
    pub services: Arc<dyn ServiceManagerPort>,
    pub accounts: Arc<dyn UserAccountPort>,
    pub firewall: Arc<dyn FirewallPort>,

    // Reporting / 状态上报
    pub status: Arc<dyn StatusPort>,

    pub layout: ServiceLayout,
}
