//! Genesis block construction
//!
//! Builds the coinbase-only block that anchors a network. The header's merkle
//! root and the block hash are always derived from the literals here and then
//! compared against the expected values by the caller, so a transcription
//! error in any literal is caught at startup.

use tracing::debug;

use crate::chainparams::NetworkId;
use crate::consensus::{target_from_compact, Block, BlockHeader, Script, Transaction, OP_CHECKSIG};
use crate::crypto::Hash;
use crate::error::ParamsError;
use primitive_types::U256;

/// The literals that define a genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisParams {
    /// Arbitrary text embedded in the coinbase input
    pub timestamp_text: &'static str,
    /// Compact-bits value pushed at the start of the coinbase input
    pub script_bits: u32,
    /// Small integer pushed after `script_bits`
    pub extra_nonce: i64,
    /// Coinbase output value in base units
    pub reward: i64,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Build the genesis block paying `reward` to `output_pubkey`.
///
/// Pure: the same inputs always produce the same block, hash and merkle root.
pub fn build_genesis_block(params: &GenesisParams, output_pubkey: &[u8]) -> Block {
    let script_sig = Script::new()
        .push_int(i64::from(params.script_bits))
        .push_script_num(params.extra_nonce)
        .push_slice(params.timestamp_text.as_bytes());
    let script_pubkey = Script::new().push_slice(output_pubkey).push_opcode(OP_CHECKSIG);
    let coinbase = Transaction::coinbase(script_sig, params.reward, script_pubkey);

    let mut block = Block::new(
        BlockHeader::new(
            params.version,
            Hash::zero(),
            Hash::zero(),
            params.time,
            params.bits,
            params.nonce,
        ),
        vec![coinbase],
    );
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// Check a freshly built genesis against its expected literals and the
/// network's proof-of-work limit. Returns the verified block hash.
pub fn verify_genesis(
    network: NetworkId,
    block: &Block,
    expected_hash: &str,
    expected_merkle_root: &str,
    pow_limit: U256,
) -> Result<Hash, ParamsError> {
    let expected_merkle_root = Hash::from_hex(expected_merkle_root)?;
    let computed_merkle_root = block.compute_merkle_root();
    if computed_merkle_root != expected_merkle_root
        || block.header.merkle_root != expected_merkle_root
    {
        return Err(ParamsError::MerkleRootMismatch {
            network,
            expected: expected_merkle_root,
            computed: computed_merkle_root,
        });
    }

    let expected_hash = Hash::from_hex(expected_hash)?;
    let computed_hash = block.hash();
    if computed_hash != expected_hash {
        return Err(ParamsError::GenesisHashMismatch {
            network,
            expected: expected_hash,
            computed: computed_hash,
        });
    }

    match target_from_compact(block.header.bits) {
        Some(target) if !target.is_zero() && target <= pow_limit => {}
        _ => return Err(ParamsError::GenesisTargetAboveLimit { network }),
    }

    debug!(
        %network,
        hash = %computed_hash,
        merkle_root = %computed_merkle_root,
        "genesis verified"
    );
    Ok(computed_hash)
}
