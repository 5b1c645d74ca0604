//! Network selection and lookup
//!
//! A [`ParameterRegistry`] owns one profile per network and remembers which
//! one is current. Nodes normally go through the process-wide instance behind
//! [`select_network`] / [`current_parameters`]; test harnesses that need
//! several networks at once create their own registries.

use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info};

use super::network::NetworkId;
use super::networks::build_params;
use super::profile::{ModifiableParams, NetworkProfile};
use crate::config::{network_from_command_line, NetworkArgs};
use crate::error::ParamsError;

/// Owns every network profile and the current selection
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    main: Arc<NetworkProfile>,
    test: Arc<NetworkProfile>,
    unit_test: Arc<NetworkProfile>,
    current: Option<NetworkId>,
}

impl ParameterRegistry {
    /// Build and verify all profiles, starting with no network selected
    pub fn try_new() -> Result<Self, ParamsError> {
        Ok(Self {
            main: Arc::new(build_params(NetworkId::Main)?),
            test: Arc::new(build_params(NetworkId::Test)?),
            unit_test: Arc::new(build_params(NetworkId::UnitTest)?),
            current: None,
        })
    }

    /// Build all profiles, aborting on any inconsistency in the compiled-in
    /// constants. A node must never run with a mismatched genesis.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(registry) => registry,
            Err(e) => {
                error!("invalid network parameters: {}", e);
                panic!("invalid network parameters: {e}");
            }
        }
    }

    fn slot(&self, network: NetworkId) -> &Arc<NetworkProfile> {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Test => &self.test,
            NetworkId::UnitTest => &self.unit_test,
        }
    }

    /// Profile for `network`, regardless of the current selection
    pub fn profile_for(&self, network: NetworkId) -> &NetworkProfile {
        self.slot(network)
    }

    /// Shared handle to the profile for `network`
    pub fn shared(&self, network: NetworkId) -> Arc<NetworkProfile> {
        Arc::clone(self.slot(network))
    }

    /// Make `network` current. Re-selecting is allowed.
    pub fn select(&mut self, network: NetworkId) {
        if self.current != Some(network) {
            info!(%network, "selected network parameters");
        }
        self.current = Some(network);
    }

    pub fn selected(&self) -> Option<NetworkId> {
        self.current
    }

    fn current_id(&self) -> NetworkId {
        match self.current {
            Some(network) => network,
            None => panic!("network parameters requested before a network was selected"),
        }
    }

    /// The selected profile.
    ///
    /// # Panics
    /// If no network has been selected yet.
    pub fn current(&self) -> &NetworkProfile {
        self.slot(self.current_id())
    }

    pub fn current_shared(&self) -> Arc<NetworkProfile> {
        self.shared(self.current_id())
    }

    /// Setter handle for the unit-test profile.
    ///
    /// # Panics
    /// If no network is selected or the selection is not [`NetworkId::UnitTest`].
    pub fn modifiable_current(&mut self) -> ModifiableParams<'_> {
        self.ensure_modifiable();
        ModifiableParams::new(Arc::make_mut(&mut self.unit_test))
    }

    fn ensure_modifiable(&self) {
        let network = self.current_id();
        if network != NetworkId::UnitTest {
            panic!("parameters of network {network} are not modifiable");
        }
    }

    /// Select the network named on the command line or in the config file.
    /// Returns `false`, leaving the selection untouched, if none could be resolved.
    pub fn select_from_command_line(&mut self, args: &NetworkArgs) -> bool {
        match network_from_command_line(args) {
            Some(network) => {
                self.select(network);
                true
            }
            None => false,
        }
    }
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<RwLock<ParameterRegistry>> =
    Lazy::new(|| RwLock::new(ParameterRegistry::new()));

/// Select the process-wide network
pub fn select_network(network: NetworkId) {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner).select(network);
}

/// Select the process-wide network from command-line/config input
pub fn select_network_from_command_line(args: &NetworkArgs) -> bool {
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .select_from_command_line(args)
}

/// Parameters of the process-wide selected network.
///
/// # Panics
/// If [`select_network`] has not been called.
pub fn current_parameters() -> Arc<NetworkProfile> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner).current_shared()
}

/// Parameters of `network` from the process-wide registry
pub fn parameters_for(network: NetworkId) -> Arc<NetworkProfile> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner).shared(network)
}

/// Run `f` with setters for the process-wide unit-test profile.
///
/// `f` edits a private copy and no lock is held while it runs, so it may call
/// [`current_parameters`] freely; those reads see the profile as it was before
/// `f`, and [`ModifiableParams::profile`] shows the pending edits. The copy
/// replaces the registry's unit-test profile when `f` returns. A concurrent
/// call that finishes later wins.
///
/// # Panics
/// If the process-wide selection is not [`NetworkId::UnitTest`].
pub fn with_modifiable_parameters<R>(f: impl FnOnce(&mut ModifiableParams<'_>) -> R) -> R {
    let mut profile = {
        let registry = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
        registry.ensure_modifiable();
        registry.unit_test.as_ref().clone()
    };
    let result = f(&mut ModifiableParams::new(&mut profile));
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner).unit_test = Arc::new(profile);
    result
}
