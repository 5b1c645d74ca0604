//! Process-wide unit-test mutation
//!
//! Own test binary: it selects the unit-test network for the whole process.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use ivc_params::chainparams::with_modifiable_parameters;
use ivc_params::{current_parameters, parameters_for, select_network, NetworkId};

#[test]
fn test_reads_inside_and_after_mutation() {
    select_network(NetworkId::UnitTest);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let seen_inside = with_modifiable_parameters(|p| {
            p.set_subsidy_halving_interval(150);
            assert_eq!(p.profile().subsidy_halving_interval, 150);
            // Reads inside the closure see the profile from before the edit
            let current = current_parameters().subsidy_halving_interval;
            let by_id = parameters_for(NetworkId::UnitTest).subsidy_halving_interval;
            (current, by_id)
        });
        let after = current_parameters().subsidy_halving_interval;
        tx.send((seen_inside, after)).unwrap();
    });

    let ((current, by_id), after) = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("parameter access inside the mutation closure blocked");
    assert_eq!(current, 840_000);
    assert_eq!(by_id, 840_000);
    assert_eq!(after, 150);
    assert_eq!(parameters_for(NetworkId::Main).subsidy_halving_interval, 840_000);
}
