//! Network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParamsError;

/// Identifies one of the networks this node knows parameters for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// In-process unit-test network; the only one with mutable parameters
    UnitTest,
}

impl NetworkId {
    /// Every supported network, in lookup order
    pub const ALL: [NetworkId; 3] = [NetworkId::Main, NetworkId::Test, NetworkId::UnitTest];

    /// Short name used in logs, config files and data directories
    pub fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::UnitTest => "unittest",
        }
    }

    pub fn iter() -> impl Iterator<Item = NetworkId> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Test),
            "unittest" => Ok(NetworkId::UnitTest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
