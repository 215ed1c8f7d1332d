use serde::{Deserialize, Serialize};

/// Provisioning markers persisted across invocations.
///
/// 跨调用持久化的供应标记。
///
/// `installed` is cleared only by [`ProvisioningState::reset_for_upgrade`].
/// `package-path-adjusted` guards the one-time removal of the package's
/// default data directory and has no way to be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProvisioningState {
    installed: bool,
    package_path_adjusted: bool,
}

impl ProvisioningState {
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn is_package_path_adjusted(&self) -> bool {
        self.package_path_adjusted
    }

    pub fn mark_installed(&mut self) {
        self.installed = true;
    }

    pub fn mark_package_path_adjusted(&mut self) {
        self.package_path_adjusted = true;
    }

    /// Forget the install so the next invocation redoes it.
    pub fn reset_for_upgrade(&mut self) {
        self.installed = false;
    }
}
