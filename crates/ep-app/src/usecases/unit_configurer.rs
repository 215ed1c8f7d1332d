//! Use case for rendering and registering the service unit.

use std::sync::Arc;

use ep_core::ports::{HostFilesystemPort, ServiceManagerPort};
use ep_core::service::templates;
use ep_core::{InitVariant, ServiceLayout};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Unit written. `enabled` is false when registration failed or does not apply.
    Rendered { enabled: bool },
    /// A systemd unit already existed; nothing was rendered or enabled.
    AlreadyPresent,
}

/// Renders exactly one of the two unit templates for the host's init variant.
///
/// ## Behavior
/// - Upstart: the job file is rendered on every call and never enabled.
/// - Systemd: render and `enable` only when no unit file exists yet. A failed
///   `enable` is logged and swallowed; start-on-boot is best effort.
pub struct EnsureServiceUnit {
    fs: Arc<dyn HostFilesystemPort>,
    services: Arc<dyn ServiceManagerPort>,
    layout: ServiceLayout,
}

impl EnsureServiceUnit {
    pub fn new(
        fs: Arc<dyn HostFilesystemPort>,
        services: Arc<dyn ServiceManagerPort>,
        layout: ServiceLayout,
    ) -> Self {
        Self {
            fs,
            services,
            layout,
        }
    }

    pub async fn execute(&self, variant: InitVariant) -> anyhow::Result<UnitOutcome> {
        let path = self.layout.unit_path(variant);
        match variant {
            InitVariant::Upstart => {
                let job = templates::upstart_job(&self.layout);
                self.fs
                    .write_file(path, job.as_bytes(), ServiceLayout::RENDERED_FILE_MODE)
                    .await?;
                info!(path = %path.display(), "rendered upstart job");
                Ok(UnitOutcome::Rendered { enabled: false })
            }
            InitVariant::Systemd => {
                if self.fs.exists(path).await {
                    debug!(path = %path.display(), "systemd unit already present");
                    return Ok(UnitOutcome::AlreadyPresent);
                }

                let unit = templates::systemd_unit(&self.layout);
                self.fs
                    .write_file(path, unit.as_bytes(), ServiceLayout::RENDERED_FILE_MODE)
                    .await?;
                info!(path = %path.display(), "rendered systemd unit");

                let enabled = match self.services.enable(&self.layout.service_name).await {
                    Ok(()) => true,
                    Err(err) => {
                        warn!(
                            service = %self.layout.service_name,
                            error = %err,
                            "service enable failed; continuing without start-on-boot"
                        );
                        false
                    }
                };
                Ok(UnitOutcome::Rendered { enabled })
            }
        }
    }
}
