//! Single-trigger entry point.

use std::sync::Arc;

use anyhow::Context;
use ep_app::{ReconciliationController, TriggerDispatcher};
use ep_core::ports::PeerRelationPort;
use ep_infra::JsonPeerRelation;
use ep_platform::TokioCommandRunner;
use tracing::{error, info, info_span, Instrument};

use super::config::resolve_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::cli::Cli;

/// Load config, set up logging, and handle `cli.trigger` once.
///
/// Blocked and skipped outcomes are successes; only a failed phase makes
/// this return `Err`.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref())?;
    init_tracing_subscriber(&config.log_dir).context("Failed to initialize tracing")?;

    let span = info_span!("agent.run", trigger = %cli.trigger);
    async {
        info!(state_dir = %config.state_dir.display(), port = config.port, "handling trigger");

        let deps = wire_dependencies(&config, Arc::new(TokioCommandRunner));
        let dispatcher = TriggerDispatcher::new(Arc::new(ReconciliationController::from_deps(deps)));

        let peer = JsonPeerRelation::load(&config.peer_data_path)
            .await
            .context("Failed to read peer data")?;
        let peer = peer.as_ref().map(|p| p as &dyn PeerRelationPort);

        match dispatcher.handle(cli.trigger, peer).await {
            Ok(report) => {
                info!(
                    install = ?report.install,
                    configure = ?report.configure,
                    "trigger complete"
                );
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "trigger failed");
                Err(err).context(format!("{} trigger failed", cli.trigger))
            }
        }
    }
    .instrument(span)
    .await
}
