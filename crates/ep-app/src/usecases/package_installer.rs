//! Use case for the distro package fallback.

use std::sync::Arc;

use ep_core::ports::{HostFilesystemPort, PackageManagerPort, ServiceManagerPort};
use ep_core::service::FALLBACK_PACKAGES;
use ep_core::ServiceLayout;
use tracing::{debug, info, warn};

/// Installs etcd from the distro archive and clears the state the package
/// seeds on first start.
///
/// [`InstallFromPackage::normalize`] is destructive. The caller must run it
/// at most once per host; it does not check on its own.
pub struct InstallFromPackage {
    packages: Arc<dyn PackageManagerPort>,
    services: Arc<dyn ServiceManagerPort>,
    fs: Arc<dyn HostFilesystemPort>,
    layout: ServiceLayout,
}

impl InstallFromPackage {
    pub fn new(
        packages: Arc<dyn PackageManagerPort>,
        services: Arc<dyn ServiceManagerPort>,
        fs: Arc<dyn HostFilesystemPort>,
        layout: ServiceLayout,
    ) -> Self {
        Self {
            packages,
            services,
            fs,
            layout,
        }
    }

    pub async fn install(&self) -> anyhow::Result<()> {
        let names: Vec<String> = FALLBACK_PACKAGES.iter().map(|p| p.to_string()).collect();
        self.packages.update().await?;
        self.packages.install(&names).await?;
        info!(packages = ?names, "installed fallback packages");
        Ok(())
    }

    /// Stop the packaged service and remove its default data directory.
    pub async fn normalize(&self) -> anyhow::Result<()> {
        self.services.stop(&self.layout.service_name).await?;

        let seeded = &self.layout.package_data_dir;
        if self.fs.exists(seeded).await {
            warn!(path = %seeded.display(), "removing data seeded by the distro package");
            self.fs.remove_dir_all(seeded).await?;
        } else {
            debug!(path = %seeded.display(), "no package-seeded data to remove");
        }
        Ok(())
    }
}
