//! Network selection from the command line and config file

use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::chainparams::NetworkId;
use crate::error::ParamsError;

/// Network selector flags shared by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the unit-test network
    #[arg(long)]
    pub unittest: bool,

    /// Network name (main, test, unittest)
    #[arg(long)]
    pub network: Option<String>,

    /// Path to a TOML config file, consulted when no flag selects a network
    #[arg(long = "config")]
    pub config_path: Option<PathBuf>,
}

/// Node configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Network name, same spellings as `--network`
    #[serde(default)]
    pub network: Option<String>,
}

impl NodeConfig {
    pub fn load(path: &Path) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ParamsError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ParamsError> {
        toml::from_str(content)
            .map_err(|e| ParamsError::Config(format!("Failed to parse config: {}", e)))
    }
}

/// Resolve the network requested by `args`.
///
/// Flags and `--network` must agree. With none of them set, the config file
/// decides, and without a config entry the main network is used.
pub fn resolve_network(args: &NetworkArgs) -> Result<NetworkId, ParamsError> {
    let mut requested: Vec<NetworkId> = Vec::new();
    if args.testnet {
        requested.push(NetworkId::Test);
    }
    if args.unittest {
        requested.push(NetworkId::UnitTest);
    }
    if let Some(name) = &args.network {
        requested.push(name.parse()?);
    }

    if let Some((first, rest)) = requested.split_first() {
        if let Some(other) = rest.iter().find(|n| *n != first) {
            return Err(ParamsError::ConflictingNetworks(*first, *other));
        }
        return Ok(*first);
    }

    if let Some(path) = &args.config_path {
        if let Some(name) = NodeConfig::load(path)?.network {
            return name.parse();
        }
    }

    Ok(NetworkId::Main)
}

/// [`resolve_network`] for callers that only report failure as a usage error
pub fn network_from_command_line(args: &NetworkArgs) -> Option<NetworkId> {
    match resolve_network(args) {
        Ok(network) => Some(network),
        Err(e) => {
            warn!("no valid network selected: {}", e);
            None
        }
    }
}
