use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use spdlog::{error, info};

use folio::config::{read_config, Config};
use folio::logger::configure_logger;
use folio::messages::MessageStore;
use folio::server::server_run;

#[derive(Parser)]
#[command(name = "folio", version, about = "Personal portfolio and blog server")]
struct Args {
    /// Configuration file. Defaults to folio.toml next to the executable.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn config_path(args: &Args) -> Result<PathBuf> {
    if let Some(ref path) = args.config {
        return Ok(path.clone());
    }

    let exe_path = env::current_exe()?;
    let exe_dir = exe_path
        .parent()
        .ok_or_else(|| anyhow!("Executable has no parent directory"))?;
    Ok(exe_dir.join("folio.toml"))
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config: Config = read_config(&config_path(&args)?)?;
    configure_logger(&config)?;

    let store = match config.database {
        Some(ref db) => match MessageStore::connect(&db.url).await {
            Ok(store) => Some(store),
            Err(e) => {
                // The site still serves content; only the contact form degrades
                error!("Could not connect to message store: {}", e);
                None
            }
        },
        None => None,
    };

    info!(
        "Listening on {}:{}",
        config.server.address, config.server.port
    );
    server_run(config, store).await?;

    Ok(())
}
