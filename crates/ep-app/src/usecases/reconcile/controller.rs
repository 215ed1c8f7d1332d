use std::sync::Arc;

use ep_core::ports::{
    Artifact, ArtifactLookup, ArtifactSourceError, ArtifactSourcePort, ConfigStorePort,
    HostFactsPort, HostFilesystemPort, PeerRelationPort, ProvisioningStatePort,
    ServiceManagerPort, StatusPort,
};
use ep_core::service::{templates, REQUIRED_ARTIFACTS};
use ep_core::{HostFacts, ProvisioningState, ServiceLayout, WorkloadStatus};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::deps::AgentDeps;
use crate::usecases::{
    EnsureServiceAccount, EnsureServiceUnit, InstallFromPackage, ProvisionCredentials,
    ReconcilePorts,
};

use super::{BlockReason, ConfigureError, ConfigureOutcome, InstallError, InstallOutcome, SkipReason};

/// Peer key carrying the cluster membership string.
const CLUSTER_KEY: &str = "cluster";

/// Drives the install and configure phases.
///
/// ## Behavior
/// - `reconcile_install()` is a no-op once `installed` is set.
/// - `reconcile_configure()` re-runs every step whenever it is allowed to run.
/// - Every marker change is persisted before the next step starts.
pub struct ReconciliationController {
    state: Arc<dyn ProvisioningStatePort>,
    config: Arc<dyn ConfigStorePort>,
    host_facts: Arc<dyn HostFactsPort>,
    artifacts: Arc<dyn ArtifactSourcePort>,
    fs: Arc<dyn HostFilesystemPort>,
    services: Arc<dyn ServiceManagerPort>,
    status: Arc<dyn StatusPort>,

    install_from_package: InstallFromPackage,
    ensure_account: EnsureServiceAccount,
    ensure_unit: EnsureServiceUnit,
    provision_credentials: ProvisionCredentials,
    reconcile_ports: ReconcilePorts,

    layout: ServiceLayout,
}

impl ReconciliationController {
    /// Construct the controller and its step use cases from a dependency bundle.
    pub fn from_deps(deps: AgentDeps) -> Self {
        let AgentDeps {
            state,
            config,
            host_facts,
            fs,
            artifacts,
            packages,
            services,
            accounts,
            firewall,
            status,
            layout,
        } = deps;

        Self {
            install_from_package: InstallFromPackage::new(
                packages,
                services.clone(),
                fs.clone(),
                layout.clone(),
            ),
            ensure_account: EnsureServiceAccount::new(accounts.clone(), fs.clone(), layout.clone()),
            ensure_unit: EnsureServiceUnit::new(fs.clone(), services.clone(), layout.clone()),
            provision_credentials: ProvisionCredentials::new(
                fs.clone(),
                accounts,
                layout.clone(),
            ),
            reconcile_ports: ReconcilePorts::new(firewall),
            state,
            config,
            host_facts,
            artifacts,
            fs,
            services,
            status,
            layout,
        }
    }

    pub async fn reconcile_install(&self) -> Result<InstallOutcome, InstallError> {
        let span = info_span!("usecase.reconcile_install");
        async {
            let mut state = self.state.load_state().await.map_err(InstallError::State)?;
            if state.is_installed() {
                debug!("installed marker set; nothing to do");
                return Ok(InstallOutcome::AlreadyInstalled);
            }

            self.report(WorkloadStatus::maintenance("Installing etcd."))
                .await;
            let facts = self
                .host_facts
                .probe()
                .await
                .map_err(InstallError::HostFacts)?;

            let artifacts = match self.resolve_artifacts().await {
                Ok(artifacts) => artifacts,
                Err(ArtifactSourceError::CapabilityUnavailable(reason)) => {
                    warn!(%reason, "host runtime cannot supply artifacts");
                    self.report(WorkloadStatus::blocked(
                        "This agent requires resource support from the host runtime",
                    ))
                    .await;
                    return Ok(InstallOutcome::Blocked(BlockReason::CapabilityUnavailable));
                }
                Err(err) => return Err(err.into()),
            };

            match artifacts {
                Some(artifacts) => self.install_from_artifacts(&mut state, &facts, artifacts).await,
                None if facts.has_package_fallback() => {
                    self.install_from_package(&mut state).await
                }
                None => {
                    info!(codename = %facts.codename, "artifacts missing and no package fallback");
                    self.report(WorkloadStatus::blocked("Missing Resource: see README"))
                        .await;
                    Ok(InstallOutcome::Blocked(BlockReason::MissingArtifacts))
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn reconcile_configure(
        &self,
        peer: Option<&dyn PeerRelationPort>,
    ) -> Result<ConfigureOutcome, ConfigureError> {
        let span = info_span!("usecase.reconcile_configure");
        async {
            let state = self.state.load_state().await.map_err(ConfigureError::State)?;
            if !state.is_installed() {
                debug!("not installed; configure deferred");
                return Ok(ConfigureOutcome::Skipped(SkipReason::NotInstalled));
            }
            let Some(peer) = peer else {
                self.report(WorkloadStatus::waiting("Waiting for TLS peer relation"))
                    .await;
                return Ok(ConfigureOutcome::Skipped(SkipReason::PeerUnavailable));
            };

            let desired = self.config.snapshot().await.map_err(ConfigureError::Config)?;

            self.provision_credentials
                .execute(peer)
                .await
                .map_err(ConfigureError::Credentials)?;

            let Some(cluster) = peer
                .get_remote(CLUSTER_KEY)
                .await
                .map_err(ConfigureError::Peer)?
            else {
                self.report(WorkloadStatus::waiting(
                    "Waiting for cluster membership from TLS peer",
                ))
                .await;
                return Ok(ConfigureOutcome::Skipped(SkipReason::ClusterUnknown));
            };

            let defaults = templates::defaults_file(&templates::DefaultsContext {
                port: desired.port,
                cluster: &cluster,
                layout: &self.layout,
            });
            self.fs
                .write_file(
                    &self.layout.defaults_path,
                    defaults.as_bytes(),
                    ServiceLayout::RENDERED_FILE_MODE,
                )
                .await
                .map_err(ConfigureError::Render)?;
            debug!(path = %self.layout.defaults_path.display(), "rendered service defaults");

            let port_change = self
                .reconcile_ports
                .execute(desired.previous_port, desired.port)
                .await
                .map_err(ConfigureError::Ports)?;

            self.services
                .restart(&self.layout.service_name)
                .await
                .map_err(ConfigureError::Restart)?;

            self.config
                .commit(desired.port)
                .await
                .map_err(ConfigureError::Commit)?;

            info!(port = %desired.port, ?port_change, "etcd proxy configured");
            self.report(WorkloadStatus::active(format!(
                "etcd proxy listening on port {}",
                desired.port
            )))
            .await;

            Ok(ConfigureOutcome::Configured {
                port: desired.port,
                port_change,
            })
        }
        .instrument(span)
        .await
    }

    /// Clear `installed` so the next `reconcile_install` redoes the install.
    pub async fn reset_on_upgrade(&self) -> anyhow::Result<()> {
        let mut state = self.state.load_state().await?;
        state.reset_for_upgrade();
        self.state.save_state(&state).await?;
        info!("installed marker cleared for upgrade");
        Ok(())
    }

    /// `Ok(None)` when at least one required artifact is not supplied yet.
    async fn resolve_artifacts(&self) -> Result<Option<Vec<Artifact>>, ArtifactSourceError> {
        let mut resolved = Vec::with_capacity(REQUIRED_ARTIFACTS.len());
        for name in REQUIRED_ARTIFACTS {
            match self.artifacts.fetch(name).await? {
                ArtifactLookup::Ready(artifact) => resolved.push(artifact),
                ArtifactLookup::Missing => {
                    info!(artifact = name, "artifact not provided");
                    return Ok(None);
                }
            }
        }
        Ok(Some(resolved))
    }

    async fn install_from_artifacts(
        &self,
        state: &mut ProvisioningState,
        facts: &HostFacts,
        artifacts: Vec<Artifact>,
    ) -> Result<InstallOutcome, InstallError> {
        for artifact in &artifacts {
            let target = self.layout.binary_path(&artifact.name);
            self.fs
                .write_file(&target, &artifact.bytes, ServiceLayout::BINARY_MODE)
                .await
                .map_err(InstallError::Binaries)?;
            info!(artifact = %artifact.name, path = %target.display(), "installed binary");
        }

        self.ensure_account
            .execute()
            .await
            .map_err(InstallError::ServiceAccount)?;

        let variant = facts.init_variant();
        let unit = self
            .ensure_unit
            .execute(variant)
            .await
            .map_err(InstallError::ServiceUnit)?;
        debug!(?variant, ?unit, "service unit ensured");

        state.mark_installed();
        self.persist(state).await?;
        info!("etcd installed from artifacts");
        Ok(InstallOutcome::InstalledFromArtifacts)
    }

    async fn install_from_package(
        &self,
        state: &mut ProvisioningState,
    ) -> Result<InstallOutcome, InstallError> {
        self.report(WorkloadStatus::maintenance(
            "Attempting install of etcd from apt",
        ))
        .await;
        self.install_from_package
            .install()
            .await
            .map_err(InstallError::Package)?;

        if state.is_package_path_adjusted() {
            debug!("package state already normalized; keeping existing data");
        } else {
            self.install_from_package
                .normalize()
                .await
                .map_err(InstallError::Normalize)?;
            state.mark_package_path_adjusted();
            self.persist(state).await?;
        }

        state.mark_installed();
        self.persist(state).await?;
        info!("etcd installed from distro package");
        Ok(InstallOutcome::InstalledFromPackage)
    }

    async fn persist(&self, state: &ProvisioningState) -> Result<(), InstallError> {
        self.state
            .save_state(state)
            .await
            .map_err(InstallError::State)
    }

    /// Status is informational; a failing report never aborts a phase.
    async fn report(&self, status: WorkloadStatus) {
        if let Err(err) = self.status.set_status(status.clone()).await {
            warn!(error = %err, ?status, "failed to report workload status");
        }
    }
}
