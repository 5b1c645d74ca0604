//! Chain parameters - per-network constants, genesis verification and
//! network selection

mod checkpoints;
mod genesis;
mod network;
mod networks;
mod profile;
mod registry;
mod seeds;

pub use checkpoints::*;
pub use genesis::*;
pub use network::*;
pub use networks::*;
pub use profile::*;
pub use registry::*;
pub use seeds::*;
