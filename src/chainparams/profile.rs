//! The per-network parameter record

use primitive_types::U256;
use serde::Serialize;
use std::ops::Index;

use super::checkpoints::CheckpointSet;
use super::network::NetworkId;
use super::seeds::{DnsSeed, SeedAddress};
use crate::consensus::{target_to_compact, Block};
use crate::crypto::Hash;

/// Kinds of Base58Check payloads that carry a network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Prefix bytes for every [`Base58Type`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressPrefixes([Vec<u8>; 5]);

impl AddressPrefixes {
    pub fn new(
        pubkey_address: &[u8],
        script_address: &[u8],
        secret_key: &[u8],
        ext_public_key: &[u8],
        ext_secret_key: &[u8],
    ) -> Self {
        Self([
            pubkey_address.to_vec(),
            script_address.to_vec(),
            secret_key.to_vec(),
            ext_public_key.to_vec(),
            ext_secret_key.to_vec(),
        ])
    }

    pub fn get(&self, kind: Base58Type) -> &[u8] {
        &self.0[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> {
        Base58Type::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl Index<Base58Type> for AddressPrefixes {
    type Output = [u8];

    fn index(&self, kind: Base58Type) -> &[u8] {
        self.get(kind)
    }
}

/// All constants that distinguish one network from another.
///
/// Built once per network by the builders in `networks`; the genesis hash
/// stored here has been recomputed and checked against its literal.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProfile {
    pub network_id: NetworkId,
    pub network_name: String,

    /// Magic bytes that start every p2p message
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub alert_public_key: Vec<u8>,

    pub proof_of_work_limit: U256,
    pub subsidy_halving_interval: u32,
    pub enforce_block_upgrade_majority: u32,
    pub reject_block_outdated_majority: u32,
    pub to_check_block_upgrade_majority: u32,
    /// Miner threads to start by default, 0 meaning one per core
    pub default_miner_threads: u32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    /// Tips older than this (seconds) keep the node in initial download
    pub max_tip_age: i64,
    /// Height after which v2 blocks are enforced; `None` leaves it to the
    /// supermajority rule
    pub enforce_v2_after_height: Option<u64>,

    pub genesis: Block,
    pub genesis_hash: Hash,

    pub address_prefixes: AddressPrefixes,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,
    pub checkpoints: CheckpointSet,

    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard_tx: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    /// Keep the deprecated `testnet` field in RPC output
    pub testnet_deprecated_rpc_field: bool,
}

impl NetworkProfile {
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.address_prefixes.get(kind)
    }

    /// Blocks between difficulty retargets
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Whether v2 blocks are mandatory at `height` by the fixed-height rule
    pub fn enforces_v2_at(&self, height: u64) -> bool {
        self.enforce_v2_after_height.is_some_and(|h| height > h)
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            network: self.network_name.clone(),
            message_start: hex::encode(self.message_start),
            default_port: self.default_port,
            genesis_hash: self.genesis_hash.to_hex(),
            genesis_merkle_root: self.genesis.header.merkle_root.to_hex(),
            genesis_time: self.genesis.header.timestamp,
            pow_limit_bits: format!("{:08x}", target_to_compact(self.proof_of_work_limit)),
            subsidy_halving_interval: self.subsidy_halving_interval,
            target_timespan: self.target_timespan,
            target_spacing: self.target_spacing,
            enforce_v2_after_height: self.enforce_v2_after_height,
            address_prefixes: self
                .address_prefixes
                .iter()
                .map(|(kind, prefix)| (kind, hex::encode(prefix)))
                .collect(),
            dns_seeds: self.dns_seeds.iter().map(|s| s.host.clone()).collect(),
            fixed_seeds: self.fixed_seeds.iter().map(|s| s.socket_addr().to_string()).collect(),
            checkpoints: self.checkpoints.iter().map(|(h, hash)| (h, hash.to_hex())).collect(),
            allow_min_difficulty_blocks: self.allow_min_difficulty_blocks,
            require_standard_tx: self.require_standard_tx,
            mine_blocks_on_demand: self.mine_blocks_on_demand,
        }
    }
}

/// Printable view of a profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub network: String,
    pub message_start: String,
    pub default_port: u16,
    pub genesis_hash: String,
    pub genesis_merkle_root: String,
    pub genesis_time: u32,
    pub pow_limit_bits: String,
    pub subsidy_halving_interval: u32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub enforce_v2_after_height: Option<u64>,
    pub address_prefixes: Vec<(Base58Type, String)>,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: Vec<String>,
    pub checkpoints: Vec<(u64, String)>,
    pub allow_min_difficulty_blocks: bool,
    pub require_standard_tx: bool,
    pub mine_blocks_on_demand: bool,
}

/// Setters for the consensus constants test harnesses may change.
///
/// Only the registry hands these out, and only for the unit-test profile.
/// Checkpoints and genesis are deliberately not reachable from here.
pub struct ModifiableParams<'a> {
    profile: &'a mut NetworkProfile,
}

impl<'a> ModifiableParams<'a> {
    pub(crate) fn new(profile: &'a mut NetworkProfile) -> Self {
        debug_assert_eq!(profile.network_id, NetworkId::UnitTest);
        Self { profile }
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.profile.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.profile.enforce_block_upgrade_majority = majority;
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.profile.reject_block_outdated_majority = majority;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.profile.to_check_block_upgrade_majority = window;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.profile.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.profile.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.profile.skip_proof_of_work_check = skip;
    }

    /// Read access to the profile being modified
    pub fn profile(&self) -> &NetworkProfile {
        self.profile
    }
}
