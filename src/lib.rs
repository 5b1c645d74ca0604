//! Invictus (IVC) network parameters
//!
//! Defines, builds and verifies the constants that tell one IVC network from
//! another: genesis block, proof-of-work bounds, address prefixes,
//! checkpoints, seeds and rule activation heights. The rest of the node reads
//! them through a [`chainparams::ParameterRegistry`].

pub mod address;
pub mod chainparams;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod error;

pub use chainparams::{
    current_parameters, parameters_for, select_network, select_network_from_command_line, NetworkId,
    NetworkProfile, ParameterRegistry,
};
pub use error::{AddressError, ParamsError};

/// Protocol constants
pub mod constants {
    /// Base units per coin
    pub const COIN: i64 = 100_000_000;
}
