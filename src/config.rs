//! SDK configuration and Stellar network constants.

use crate::error::Error;
use std::time::Duration;

/// Network passphrase for the SDF test network.
pub const TESTNET_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Network passphrase for the public Stellar network.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Default timeout for RPC requests
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`SorobanDomainsSdk`](crate::SorobanDomainsSdk).
///
/// Constructed once per resolver instance and never mutated.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Soroban RPC endpoint URL.
    pub rpc_url: String,

    /// Contract id of the domains registry (`C...` strkey).
    pub contract_id: String,

    /// `"testnet"` (case-insensitive) selects the test network; any
    /// other value selects the public network.
    pub network_passphrase: String,

    /// Account used as the transaction source for simulation. Never
    /// charged or signed.
    pub simulation_account: String,

    /// Base fee for the simulated transaction, in stroops.
    pub default_fee: u32,

    /// Transaction validity window in seconds; `None` leaves the window
    /// open.
    pub default_timeout: Option<u64>,
}

impl SdkConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.rpc_url.is_empty() {
            return Err(Error::Validation("RPC URL is required".to_string()));
        }
        if self.contract_id.is_empty() {
            return Err(Error::Validation("Contract ID is required".to_string()));
        }
        Ok(())
    }

    /// Resolve the configured network selector to a passphrase literal.
    pub fn resolved_passphrase(&self) -> &'static str {
        if self.network_passphrase.eq_ignore_ascii_case("testnet") {
            TESTNET_NETWORK_PASSPHRASE
        } else {
            PUBLIC_NETWORK_PASSPHRASE
        }
    }
}
