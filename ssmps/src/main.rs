use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::anyhow;
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ssmps::{
    app::{fetch, validate_names},
    configs::{Configs, SsmpsConfig},
    store::adapters::ssm_store::SsmParameterStore,
};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(version, about = "Print values from AWS Systems Manager Parameter Store", long_about = None)]
struct Args {
    /// Base path prepended to relative names. Overrides SSMPS_BASE_PATH.
    #[arg(long, short = 'b')]
    base_path: Option<String>,

    /// Parameter names. One name prints its value, several print a JSON object.
    names: Vec<String>,
}

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries the fetched values
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    validate_names(&args.names)?;

    let config = SsmpsConfig::load()
        .await
        .map_err(|e| anyhow!(e.to_string()))?
        .with_base_path(args.base_path);
    debug!("CONFIGS: {:?}", &config);

    let store = SsmParameterStore::new(&config.store_config).await?;
    let output = fetch(&store, &config.base_path, &args.names).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.render()?.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    setup_logging();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
