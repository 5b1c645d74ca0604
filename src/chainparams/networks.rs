//! Per-network parameter builders
//!
//! Test and unit-test start from the main profile and override what differs,
//! so every value not mentioned in their builders is main's.

use super::checkpoints::{CheckpointData, CheckpointSet};
use super::genesis::{build_genesis_block, verify_genesis, GenesisParams};
use super::network::NetworkId;
use super::profile::{AddressPrefixes, NetworkProfile};
use super::seeds::{convert_seeds, parse_packed_table, DnsSeed};
use crate::consensus::pow_limit;
use crate::constants::COIN;
use crate::error::ParamsError;

/// Key that signs network alerts and receives the genesis output
const MAIN_ALERT_KEY: &str = concat!(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6",
    "49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
);

/// Proof-of-work limit is `!0 >> 20`
const POW_LIMIT_SHIFT: u32 = 20;

const MAIN_GENESIS: GenesisParams = GenesisParams {
    timestamp_text: "invictus genesis block",
    script_bits: 486604799,
    extra_nonce: 4,
    reward: COIN,
    version: 1,
    time: 1502136266,
    bits: 0x1e0ffff0,
    nonce: 591108,
};
const MAIN_GENESIS_HASH: &str =
    "67e3d3614287f7a7edb3696bab881554063f9e75d01ac0bddfc60da1e71c9808";
const GENESIS_MERKLE_ROOT: &str = "9ec48a98eca7ff371ac7f5a4411d1d3077b700884333d4ee8a2bc07f97a7347c";

/// Testnet reuses main's coinbase and only moves the timestamp
const TEST_GENESIS: GenesisParams = GenesisParams {
    time: 1510577755,
    nonce: 578468,
    ..MAIN_GENESIS
};
const TEST_GENESIS_HASH: &str = "ce7761c71a6a3c092dfc83dc2f523fc459f3f186f7ff4bfb3e51678ab0f2b738";

// A good checkpoint block is surrounded by blocks with sane timestamps and
// contains no unusual transactions.
const MAIN_CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, MAIN_GENESIS_HASH)],
    last_checkpoint_time: 1502136266,
    transactions_last_checkpoint: 0,
    transactions_per_day: 750.0,
};

const TEST_CHECKPOINTS: CheckpointData = CheckpointData {
    checkpoints: &[(0, TEST_GENESIS_HASH)],
    last_checkpoint_time: 1510577755,
    transactions_last_checkpoint: 0,
    transactions_per_day: 250.0,
};

const MAIN_PORT: u16 = 41184;

// Packed fixed seed tables, PACKED_SEED_SIZE bytes per record. The generated
// seed lists have not been published for IVC yet, so both start out empty and
// peers come from DNS seeding.
const MAIN_SEED_TABLE: &[u8] = &[];
const TEST_SEED_TABLE: &[u8] = &[];

const MAIN_DNS_SEEDS: &[(&str, &str)] = &[
    ("cryptolife.net", "wallet.cryptolife.net"),
    ("cryptolife.net", "explore.cryptolife.net"),
    ("cryptolife.net", "seed1.cryptolife.net"),
    ("cryptolife.net", "seed2.cryptolife.net"),
    ("104.156.231.213", "45.77.7.67"),
];

/// Build the production network profile
pub fn main_params() -> Result<NetworkProfile, ParamsError> {
    let network = NetworkId::Main;
    let alert_public_key = hex::decode(MAIN_ALERT_KEY)?;
    let proof_of_work_limit = pow_limit(POW_LIMIT_SHIFT);

    let genesis = build_genesis_block(&MAIN_GENESIS, &alert_public_key);
    let genesis_hash = verify_genesis(
        network,
        &genesis,
        MAIN_GENESIS_HASH,
        GENESIS_MERKLE_ROOT,
        proof_of_work_limit,
    )?;

    let checkpoints = CheckpointSet::from_data(&MAIN_CHECKPOINTS)?;
    checkpoints.verify_genesis(network, &genesis_hash)?;

    Ok(NetworkProfile {
        network_id: network,
        network_name: network.name().to_string(),
        // Rarely used upper ASCII, not valid UTF-8, large 32-bit int at any alignment
        message_start: [0xde, 0xca, 0xa4, 0xeb],
        default_port: MAIN_PORT,
        alert_public_key,
        proof_of_work_limit,
        subsidy_halving_interval: 840_000,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        default_miner_threads: 0,
        target_timespan: 4 * 60 * 60,
        target_spacing: 150,
        max_tip_age: 24 * 60 * 60,
        enforce_v2_after_height: Some(710_000),
        genesis,
        genesis_hash,
        address_prefixes: AddressPrefixes::new(
            &[102],
            &[5],
            &[117],
            &[0x04, 0x88, 0xB2, 0x1E],
            &[0x04, 0x88, 0xAD, 0xE4],
        ),
        dns_seeds: MAIN_DNS_SEEDS
            .iter()
            .map(|(name, host)| DnsSeed::new(name, host))
            .collect(),
        fixed_seeds: convert_seeds(&parse_packed_table(MAIN_SEED_TABLE)),
        checkpoints,
        require_rpc_password: true,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard_tx: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_deprecated_rpc_field: false,
    })
}

/// Build the public test network profile
pub fn test_params() -> Result<NetworkProfile, ParamsError> {
    let network = NetworkId::Test;
    let main = main_params()?;

    let genesis = build_genesis_block(&TEST_GENESIS, &main.alert_public_key);
    let genesis_hash = verify_genesis(
        network,
        &genesis,
        TEST_GENESIS_HASH,
        GENESIS_MERKLE_ROOT,
        main.proof_of_work_limit,
    )?;

    let checkpoints = CheckpointSet::from_data(&TEST_CHECKPOINTS)?;
    checkpoints.verify_genesis(network, &genesis_hash)?;

    Ok(NetworkProfile {
        network_id: network,
        network_name: network.name().to_string(),
        message_start: [0xbc, 0xad, 0xaf, 0xc4],
        default_port: 36005,
        enforce_block_upgrade_majority: 51,
        reject_block_outdated_majority: 75,
        to_check_block_upgrade_majority: 100,
        default_miner_threads: 0,
        target_timespan: 10 * 60,
        target_spacing: 60,
        max_tip_age: 0x7fff_ffff,
        // v2 follows the supermajority rule on testnet
        enforce_v2_after_height: None,
        genesis,
        genesis_hash,
        address_prefixes: AddressPrefixes::new(
            &[111],
            &[196],
            &[239],
            &[0x04, 0x35, 0x87, 0xCF],
            &[0x04, 0x35, 0x83, 0x94],
        ),
        dns_seeds: Vec::new(),
        fixed_seeds: convert_seeds(&parse_packed_table(TEST_SEED_TABLE)),
        checkpoints,
        require_rpc_password: true,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: false,
        require_standard_tx: false,
        mine_blocks_on_demand: false,
        testnet_deprecated_rpc_field: true,
        ..main
    })
}

/// Build the unit-test profile: main's chain with no peers and on-demand mining
pub fn unit_test_params() -> Result<NetworkProfile, ParamsError> {
    let network = NetworkId::UnitTest;
    let main = main_params()?;

    // Same checkpoints as main
    Ok(NetworkProfile {
        network_id: network,
        network_name: network.name().to_string(),
        default_port: 18445,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        require_rpc_password: false,
        mining_requires_peers: false,
        default_consistency_checks: true,
        allow_min_difficulty_blocks: false,
        mine_blocks_on_demand: true,
        enforce_v2_after_height: None,
        ..main
    })
}

/// Build the profile for `network`
pub fn build_params(network: NetworkId) -> Result<NetworkProfile, ParamsError> {
    match network {
        NetworkId::Main => main_params(),
        NetworkId::Test => test_params(),
        NetworkId::UnitTest => unit_test_params(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::{Base58Type, PACKED_SEED_SIZE};

    #[test]
    fn test_main_constants() {
        let main = main_params().unwrap();
        assert_eq!(main.default_port, 41184);
        assert_eq!(main.subsidy_halving_interval, 840_000);
        assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[102]);
        assert_eq!(main.genesis_hash.to_hex(), MAIN_GENESIS_HASH);
        assert_eq!(main.difficulty_adjustment_interval(), 96);
        assert_eq!(main.dns_seeds.len(), 5);
        assert_eq!(main.dns_seeds[4].host, "45.77.7.67");
        // The raw-address DNS entry is a seed host, not a fixed seed record
        assert!(main.fixed_seeds.is_empty());
    }

    #[test]
    fn test_seed_tables_are_whole_records() {
        for table in [MAIN_SEED_TABLE, TEST_SEED_TABLE] {
            assert_eq!(table.len() % PACKED_SEED_SIZE, 0);
            assert_eq!(parse_packed_table(table).len(), table.len() / PACKED_SEED_SIZE);
        }
    }

    #[test]
    fn test_testnet_overrides() {
        let test = test_params().unwrap();
        assert_eq!(test.default_port, 36005);
        assert_eq!(test.genesis_hash.to_hex(), TEST_GENESIS_HASH);
        assert_eq!(test.genesis.header.merkle_root.to_hex(), GENESIS_MERKLE_ROOT);
        assert_eq!(test.difficulty_adjustment_interval(), 10);
        // Inherited from main
        assert_eq!(test.subsidy_halving_interval, 840_000);
        assert_eq!(test.proof_of_work_limit, pow_limit(POW_LIMIT_SHIFT));
        assert!(!test.skip_proof_of_work_check);
        assert!(test.dns_seeds.is_empty());
        assert!(test.fixed_seeds.is_empty());
    }

    #[test]
    fn test_unit_test_shares_main_chain() {
        let main = main_params().unwrap();
        let unit = unit_test_params().unwrap();
        assert_eq!(unit.genesis_hash, main.genesis_hash);
        assert_eq!(unit.checkpoints, main.checkpoints);
        assert_eq!(unit.message_start, main.message_start);
        assert_eq!(unit.address_prefixes, main.address_prefixes);
        assert_eq!(unit.default_port, 18445);
        assert!(unit.mine_blocks_on_demand);
        assert!(unit.default_consistency_checks);
        assert!(!unit.require_rpc_password);
        assert!(unit.fixed_seeds.is_empty());
    }

    #[test]
    fn test_v2_activation() {
        let main = main_params().unwrap();
        assert!(!main.enforces_v2_at(710_000));
        assert!(main.enforces_v2_at(710_001));
        assert!(!test_params().unwrap().enforces_v2_at(u64::MAX));
    }

    #[test]
    fn test_build_params_matches_network() {
        for id in NetworkId::iter() {
            assert_eq!(build_params(id).unwrap().network_id, id);
        }
    }
}
