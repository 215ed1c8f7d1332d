use clap::Parser;
use etcd_proxy_agent::cli::Cli;

// One trigger per process; every step runs to completion before the next.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    etcd_proxy_agent::bootstrap::run(cli).await
}
