//! HTTP client for communicating with a Soroban RPC endpoint.

use super::types::{GetLedgerEntriesResponse, JsonRpcRequest, JsonRpcResponse, SimulateTransactionResponse};
use crate::config::DEFAULT_RPC_TIMEOUT;
use crate::error::Error;
use crate::xdr::tx::{account_ledger_key_base64, account_sequence_from_entry};
use crate::xdr::{Account, Transaction};
use log::{debug, info};
use reqwest::blocking::Client;

/// Operations the resolver needs from a Soroban RPC server.
///
/// Implement this to supply a custom transport; [`RpcClient`] is the
/// blocking HTTP implementation.
pub trait SorobanRpc {
    /// Load the current state of an account.
    fn load_account(&self, account_id: &str) -> Result<Account, Error>;

    /// Simulate a transaction without submitting it.
    fn simulate_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<SimulateTransactionResponse, Error>;
}

/// Blocking JSON-RPC client for a Soroban RPC server.
pub struct RpcClient {
    client: Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(DEFAULT_RPC_TIMEOUT)
            .build()
            .map_err(|e| Error::Rpc(e.to_string()))?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    fn post<T: serde::de::DeserializeOwned>(&self, request: &JsonRpcRequest) -> Result<T, Error> {
        debug!("rpc request: {} (id {})", request.method, request.id);

        let response = self
            .client
            .post(&self.rpc_url)
            .json(request)
            .send()
            .map_err(|e| Error::Rpc(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Rpc(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let rpc_response: JsonRpcResponse<T> =
            response.json().map_err(|e| Error::Rpc(e.to_string()))?;

        if let Some(error) = rpc_response.error {
            return Err(Error::Rpc(format!("{}: {}", error.code, error.message)));
        }

        rpc_response
            .result
            .ok_or_else(|| Error::Rpc("missing result field".to_string()))
    }
}

impl SorobanRpc for RpcClient {
    fn load_account(&self, account_id: &str) -> Result<Account, Error> {
        info!("loading account {}", account_id);

        let key = account_ledger_key_base64(account_id)?;
        let response: GetLedgerEntriesResponse =
            self.post(&JsonRpcRequest::get_ledger_entries(vec![key], 1))?;

        let entry = response
            .entries
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| Error::Rpc(format!("account {} not found on ledger", account_id)))?;

        let sequence = account_sequence_from_entry(&entry.xdr)?;
        Ok(Account {
            account_id: account_id.to_string(),
            sequence,
        })
    }

    fn simulate_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<SimulateTransactionResponse, Error> {
        let envelope = transaction.to_envelope_base64()?;
        debug!(
            "simulating call to {} fn {}",
            transaction.contract_id, transaction.function_name
        );
        self.post(&JsonRpcRequest::simulate_transaction(envelope, 2))
    }
}
