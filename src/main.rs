//! tfexplorer - Main entry point

use clap::Parser;
use log::{debug, info};

use tfexplorer::{run_command, Cli, ExplorerClient, TokenResolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfexplorer v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={:?}, host={}, batch={}, no_header={}",
        cli.org, cli.host, cli.batch, cli.no_header
    );

    let org = cli
        .org
        .clone()
        .ok_or("Organization is required (--org or TFE_ORG)")?;

    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;
    let client = ExplorerClient::new(token, cli.host.clone(), org);

    run_command(&client, &cli).await?;

    info!("Completed successfully");
    Ok(())
}
