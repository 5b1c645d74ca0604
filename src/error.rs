//! Error types for parameter construction, network selection and addresses

use thiserror::Error;

use crate::chainparams::NetworkId;
use crate::crypto::Hash;

/// Failures while assembling or selecting network parameters
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network}: genesis hash mismatch (expected {expected}, computed {computed})")]
    GenesisHashMismatch {
        network: NetworkId,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network}: genesis merkle root mismatch (expected {expected}, computed {computed})")]
    MerkleRootMismatch {
        network: NetworkId,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network}: genesis bits exceed the proof-of-work limit")]
    GenesisTargetAboveLimit { network: NetworkId },
    #[error("{network}: checkpoint set has no entry at height 0")]
    MissingGenesisCheckpoint { network: NetworkId },
    #[error("{network}: checkpoint at height 0 is {checkpoint}, genesis is {genesis}")]
    GenesisCheckpointMismatch {
        network: NetworkId,
        checkpoint: Hash,
        genesis: Hash,
    },
    #[error("checkpoint heights must be strictly increasing (height {height})")]
    CheckpointOrder { height: u64 },
    #[error("invalid hex literal: {0}")]
    InvalidHexLiteral(#[from] hex::FromHexError),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("conflicting network selectors: {0} and {1}")]
    ConflictingNetworks(NetworkId, NetworkId),
    #[error("config error: {0}")]
    Config(String),
}

/// Address encoding/decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid base58 encoding")]
    Base58,
    #[error("invalid checksum")]
    Checksum,
    #[error("invalid address length")]
    Length,
    #[error("address prefix does not match any known network")]
    UnknownPrefix,
}
