use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing::{Level, info};

mod catalog;
mod config;
mod http;

use catalog::Catalog;
use config::read_config;

// development catalog server
//
// answers the movie search api from a toml catalog and, optionally, serves the
// built webapp so the overlay can be exercised end to end
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/moviesearch/config.toml")]
    config: String,

    #[arg(short, long, default_value_t = Level::INFO)]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    info!("moviesearch server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("loading catalog");

    let catalog = Arc::new(Catalog::load(&config.catalog).await?);

    info!("startup complete!");

    http::svc::serve_http(config, catalog).await
}
