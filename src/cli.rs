//! Command line surface.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use ep_core::provisioning::UnknownTrigger;
use ep_core::LifecycleTrigger;

/// Handle one lifecycle trigger delivered by the host runtime.
#[derive(Debug, Parser)]
#[command(name = "etcd-proxy-agent", version, about)]
pub struct Cli {
    /// Agent configuration file (TOML).
    #[arg(long, env = "EP_AGENT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lifecycle trigger: install, peer-available, config-changed or upgrade.
    #[arg(value_parser = parse_trigger)]
    pub trigger: LifecycleTrigger,
}

fn parse_trigger(value: &str) -> Result<LifecycleTrigger, UnknownTrigger> {
    LifecycleTrigger::from_str(value)
}
