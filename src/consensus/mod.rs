//! Consensus primitives - scripts, transactions, block headers and targets

mod block;
mod script;
mod target;
mod transaction;

pub use block::*;
pub use script::*;
pub use target::*;
pub use transaction::*;
