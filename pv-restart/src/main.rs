use clap::Parser as _;
use pv_restart_ext as k8s;
use pv_restart_kubeapi::KubeApi;
use pv_restart_matcher::Restarter;
use tracing_subscriber::EnvFilter;

use args::Args;

mod args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::info!(delete = args.delete, "Starting pv-restart");

    let filter = args.filter()?;
    let api = KubeApi::new().await?.grace_period(args.grace_period);
    let restarter = Restarter::new(api, filter).delete(args.delete);

    restarter
        .run()
        .await
        .inspect_err(|err| tracing::error!(%err, "Run aborted"))?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let directives = if verbose {
        "info,pv_restart=debug,pv_restart_kubeapi=debug,pv_restart_matcher=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
