//! Domain resolution over a Soroban RPC collaborator.
//!
//! Single-shot request/decode: derive the node, simulate the registry's
//! `record` function against it, classify the outcome and decode the
//! returned tagged value. Stateless across calls.

use crate::config::SdkConfig;
use crate::error::Error;
use crate::models::{DomainRecord, DomainResult, SubDomainRecord};
use crate::node;
use crate::rpc::{RpcClient, SorobanRpc};
use crate::xdr::{ScVal, TransactionBuilder};
use log::debug;

/// Argument tag for a top-level domain lookup.
const RECORD_KEY: &str = "Record";
/// Argument tag for a subdomain lookup.
const SUB_RECORD_KEY: &str = "SubRecord";
/// Contract function serving record lookups.
const RECORD_FN: &str = "record";
/// Variant tag of a top-level domain record.
const DOMAIN_TAG: &str = "Domain";

/// Client for the Soroban Domains registry contract.
///
/// Holds immutable configuration and a transport. Individual
/// [`search_domain`](Self::search_domain) calls are independent and
/// safe to issue concurrently.
pub struct SorobanDomainsSdk<C: SorobanRpc = RpcClient> {
    config: SdkConfig,
    client: C,
}

impl SorobanDomainsSdk<RpcClient> {
    /// Create a resolver with the default blocking HTTP transport.
    ///
    /// Fails with [`Error::Validation`] when the configuration is
    /// incomplete, before any network traffic.
    pub fn new(config: SdkConfig) -> Result<Self, Error> {
        config.validate()?;
        let client = RpcClient::new(config.rpc_url.clone())?;
        Ok(Self { config, client })
    }
}

impl<C: SorobanRpc> SorobanDomainsSdk<C> {
    /// Create a resolver over a custom [`SorobanRpc`] transport.
    pub fn with_client(config: SdkConfig, client: C) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config, client })
    }

    /// Configuration this resolver was built with.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Transport this resolver delegates to.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Look up a domain (or subdomain) record on chain.
    ///
    /// # Errors
    /// * [`Error::DomainNotFound`] - no record exists for the name
    /// * [`Error::Rpc`] - transport or contract-execution failure
    pub fn search_domain(
        &self,
        domain: &str,
        sub_domain: Option<&str>,
    ) -> Result<DomainResult, Error> {
        self.search_inner(domain, sub_domain).map_err(Error::reclassify)
    }

    fn search_inner(
        &self,
        domain: &str,
        sub_domain: Option<&str>,
    ) -> Result<DomainResult, Error> {
        let network_passphrase = self.config.resolved_passphrase();
        let node_bytes = node::node_bytes(domain, sub_domain);

        let tag = match sub_domain {
            None => RECORD_KEY,
            Some(_) => SUB_RECORD_KEY,
        };
        let params = ScVal::Vec(vec![
            ScVal::Symbol(tag.to_string()),
            ScVal::Bytes(node_bytes.to_vec()),
        ]);

        let source = self.client.load_account(&self.config.simulation_account)?;
        let transaction =
            TransactionBuilder::new(source, network_passphrase, self.config.default_fee)
                .invoke_contract_function(&self.config.contract_id, RECORD_FN, vec![params])
                .set_timeout(self.config.default_timeout.unwrap_or(0))
                .build()?;

        let response = self.client.simulate_transaction(&transaction)?;
        if let Some(error) = response.error {
            return Err(Error::Rpc(error));
        }

        let return_value = response
            .results
            .first()
            .and_then(|result| result.xdr.as_deref())
            .ok_or_else(|| Error::Rpc("simulation response contained no results".to_string()))?;

        // A name with no record comes back as a value that is not a
        // [Symbol, Map] pair (typically void): the not-found signal.
        let value = ScVal::from_xdr_base64(return_value).map_err(|_| Error::DomainNotFound)?;
        let items = value.as_vec().map_err(|_| Error::DomainNotFound)?;
        let (tag, fields) = match items {
            [tag, fields] if fields.as_map().is_ok() => (tag, fields),
            _ => return Err(Error::DomainNotFound),
        };

        let record_type = tag.as_symbol()?;
        debug!(
            "decoded {} record for node {}",
            record_type,
            hex::encode(node_bytes)
        );

        if record_type == DOMAIN_TAG {
            Ok(DomainResult::Domain(DomainRecord {
                node: hex::encode(fields.map_get("node")?.as_bytes()?),
                owner: fields.map_get("owner")?.as_address()?.to_strkey(),
                address: fields.map_get("address")?.as_address()?.to_strkey(),
                exp_date: fields.map_get("exp_date")?.as_u64()?,
                snapshot: fields.map_get("snapshot")?.as_u64()?,
                collateral: fields.map_get("collateral")?.as_u128()?,
            }))
        } else {
            Ok(DomainResult::SubDomain(SubDomainRecord {
                node: hex::encode(fields.map_get("node")?.as_bytes()?),
                parent: hex::encode(fields.map_get("parent")?.as_bytes()?),
                address: fields.map_get("address")?.as_address()?.to_strkey(),
                snapshot: fields.map_get("snapshot")?.as_u64()?,
            }))
        }
    }
}
