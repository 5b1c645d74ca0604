//! Process-wide selection facade
//!
//! Kept in its own test binary with a single test, since the selection is
//! shared by every thread in the process.

use ivc_params::chainparams::{with_modifiable_parameters, Base58Type};
use ivc_params::config::NetworkArgs;
use ivc_params::{
    current_parameters, parameters_for, select_network, select_network_from_command_line, NetworkId,
};

#[test]
fn test_global_selection_lifecycle() {
    // Uninitialized: current parameters are unavailable
    assert!(std::panic::catch_unwind(current_parameters).is_err());

    // Explicit lookup works regardless of selection
    assert_eq!(parameters_for(NetworkId::Test).default_port, 36005);

    select_network(NetworkId::Main);
    let main = current_parameters();
    assert_eq!(main.network_id, NetworkId::Main);
    assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[102]);

    // Mutation is refused outside unit-test
    let refused = std::panic::catch_unwind(|| {
        with_modifiable_parameters(|p| p.set_subsidy_halving_interval(1))
    });
    assert!(refused.is_err());

    // A failed command-line selection leaves the current network alone
    let conflicting = NetworkArgs {
        testnet: true,
        unittest: true,
        ..Default::default()
    };
    assert!(!select_network_from_command_line(&conflicting));
    assert_eq!(current_parameters().network_id, NetworkId::Main);

    let unit = NetworkArgs {
        unittest: true,
        ..Default::default()
    };
    assert!(select_network_from_command_line(&unit));
    with_modifiable_parameters(|p| {
        p.set_subsidy_halving_interval(150);
        p.set_allow_min_difficulty_blocks(true);
    });
    let current = current_parameters();
    assert_eq!(current.network_id, NetworkId::UnitTest);
    assert_eq!(current.subsidy_halving_interval, 150);
    assert!(current.allow_min_difficulty_blocks);

    // Re-selection simply repoints
    select_network(NetworkId::Test);
    assert!(current_parameters().allow_min_difficulty_blocks);
    assert_eq!(current_parameters().network_id, NetworkId::Test);
}
