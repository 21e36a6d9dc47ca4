use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// catalog server configuration
//
// the server only exists so that the webapp can be run end to end against
// something, so there is very little to configure
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    // ip and port for the http server
    pub socket: SocketAddr,

    // toml file with the [[movies]] to serve
    pub catalog: PathBuf,

    // location of the built wasm app, served at / when set
    pub doc_root: Option<PathBuf>,
}

// the config lives in a [config] subtable so that it can share a file with
// other tooling
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: ServerConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<ServerConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<ServerConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}
