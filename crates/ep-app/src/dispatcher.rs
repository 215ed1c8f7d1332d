//! Lifecycle trigger dispatch.
//!
//! Maps each host lifecycle event onto the controller entry points it runs.
//! Every trigger ends with both reconcile phases, so whichever event arrives
//! first after a state change advances provisioning as far as it can go.

use std::sync::Arc;

use ep_core::ports::PeerRelationPort;
use ep_core::LifecycleTrigger;
use tracing::{info, info_span, Instrument};

use crate::usecases::{
    ConfigureError, ConfigureOutcome, InstallError, InstallOutcome, ReconciliationController,
};

/// One controller entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ResetOnUpgrade,
    ReconcileInstall,
    ReconcileConfigure,
}

impl Handler {
    /// Handlers run for `trigger`, in order.
    pub fn handlers_for(trigger: LifecycleTrigger) -> &'static [Handler] {
        match trigger {
            LifecycleTrigger::Upgrade => &[
                Handler::ResetOnUpgrade,
                Handler::ReconcileInstall,
                Handler::ReconcileConfigure,
            ],
            LifecycleTrigger::Install
            | LifecycleTrigger::PeerAvailable
            | LifecycleTrigger::ConfigChanged => {
                &[Handler::ReconcileInstall, Handler::ReconcileConfigure]
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Install(#[from] InstallError),
    #[error(transparent)]
    Configure(#[from] ConfigureError),
    #[error("resetting install marker failed: {0}")]
    Reset(#[source] anyhow::Error),
}

/// What each phase did for one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerReport {
    pub trigger: LifecycleTrigger,
    pub install: Option<InstallOutcome>,
    pub configure: Option<ConfigureOutcome>,
}

impl TriggerReport {
    fn new(trigger: LifecycleTrigger) -> Self {
        Self {
            trigger,
            install: None,
            configure: None,
        }
    }
}

pub struct TriggerDispatcher {
    controller: Arc<ReconciliationController>,
}

impl TriggerDispatcher {
    pub fn new(controller: Arc<ReconciliationController>) -> Self {
        Self { controller }
    }

    /// Run every handler for `trigger`. The first error stops the sequence.
    pub async fn handle(
        &self,
        trigger: LifecycleTrigger,
        peer: Option<&dyn PeerRelationPort>,
    ) -> Result<TriggerReport, DispatchError> {
        let span = info_span!("dispatch", %trigger, peer = peer.is_some());
        async {
            let mut report = TriggerReport::new(trigger);
            for handler in Handler::handlers_for(trigger) {
                match handler {
                    Handler::ResetOnUpgrade => self
                        .controller
                        .reset_on_upgrade()
                        .await
                        .map_err(DispatchError::Reset)?,
                    Handler::ReconcileInstall => {
                        report.install = Some(self.controller.reconcile_install().await?);
                    }
                    Handler::ReconcileConfigure => {
                        report.configure =
                            Some(self.controller.reconcile_configure(peer).await?);
                    }
                }
            }
            info!(install = ?report.install, configure = ?report.configure, "trigger handled");
            Ok(report)
        }
        .instrument(span)
        .await
    }
}
