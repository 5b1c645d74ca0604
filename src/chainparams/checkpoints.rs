//! Checkpoints
//!
//! Known-good block hashes at fixed heights. A block at a checkpointed height
//! with a different hash is rejected, which rules out reorganizations below
//! the last checkpoint. The throughput figures only feed progress estimates.

use std::collections::BTreeMap;

use crate::chainparams::NetworkId;
use crate::crypto::Hash;
use crate::error::ParamsError;

/// Signature checks make post-checkpoint blocks this much slower to verify
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Compiled-in checkpoint literals
#[derive(Debug, Clone, Copy)]
pub struct CheckpointData {
    /// (height, display-order block hash), ascending by height
    pub checkpoints: &'static [(u64, &'static str)],
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

/// Ordered height -> hash mapping plus throughput estimates
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointSet {
    checkpoints: BTreeMap<u64, Hash>,
    pub last_checkpoint_time: i64,
    pub transactions_last_checkpoint: u64,
    pub transactions_per_day: f64,
}

impl CheckpointSet {
    /// Parse checkpoint literals; heights must be strictly increasing
    pub fn from_data(data: &CheckpointData) -> Result<Self, ParamsError> {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<u64> = None;
        for &(height, hash) in data.checkpoints {
            if previous.is_some_and(|p| height <= p) {
                return Err(ParamsError::CheckpointOrder { height });
            }
            previous = Some(height);
            checkpoints.insert(height, Hash::from_hex(hash)?);
        }

        Ok(Self {
            checkpoints,
            last_checkpoint_time: data.last_checkpoint_time,
            transactions_last_checkpoint: data.transactions_last_checkpoint,
            transactions_per_day: data.transactions_per_day,
        })
    }

    /// Ensure height 0 is present and equals the genesis hash
    pub fn verify_genesis(&self, network: NetworkId, genesis: &Hash) -> Result<(), ParamsError> {
        match self.get(0) {
            None => Err(ParamsError::MissingGenesisCheckpoint { network }),
            Some(checkpoint) if checkpoint != genesis => {
                Err(ParamsError::GenesisCheckpointMismatch {
                    network,
                    checkpoint: *checkpoint,
                    genesis: *genesis,
                })
            }
            Some(_) => Ok(()),
        }
    }

    pub fn get(&self, height: u64) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// All checkpoints in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Hash)> {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// A block passes unless a checkpoint exists at its height with another hash
    pub fn check(&self, height: u64, hash: &Hash) -> bool {
        self.get(height).map_or(true, |expected| expected == hash)
    }

    /// Height of the last checkpoint, i.e. the minimum number of blocks to expect
    pub fn last_checkpoint_height(&self) -> u64 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    /// Estimate verification progress in `[0, 1]` for a tip that has
    /// `chain_tx` transactions up to it and was mined at `block_time`.
    ///
    /// Work before the last checkpoint is counted as cheap; anything after it
    /// is weighted by the signature-check factor when `sigchecks` is set.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        block_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let per_day = self.transactions_per_day;

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - chain_tx) as f64;
            let days = (now - self.last_checkpoint_time) as f64 / SECONDS_PER_DAY;
            let expensive_after = (days * per_day).max(0.0);
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after = ((now - block_time) as f64 / SECONDS_PER_DAY * per_day).max(0.0);
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        work_before / total
    }
}
