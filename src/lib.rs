//! Soroban Domains SDK
//!
//! Resolves human-readable domain names (and subdomains) to on-chain
//! records on Soroban, Stellar's smart-contract platform.
//!
//! A domain name is hashed into a 32-byte lookup node, the registry
//! contract's `record` function is simulated against that node, and the
//! returned value is decoded into a typed [`DomainResult`]. Nothing is
//! ever signed or submitted; resolution is read-only.
//!
//! ## Getting started
//!
//! ```no_run
//! use soroban_domains_sdk::{SdkConfig, SorobanDomainsSdk};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdk = SorobanDomainsSdk::new(SdkConfig {
//!         rpc_url: "https://soroban-testnet.stellar.org".to_string(),
//!         contract_id: "CONTRACT_ID".to_string(),
//!         network_passphrase: "testnet".to_string(),
//!         simulation_account: "SIMULATION_ACCOUNT".to_string(),
//!         default_fee: 100,
//!         default_timeout: None,
//!     })?;
//!
//!     let record = sdk.search_domain("example", None)?;
//!     println!("{:?}", record);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod node;
pub mod resolver;
pub mod rpc;
pub mod xdr;

pub use config::{SdkConfig, PUBLIC_NETWORK_PASSPHRASE, TESTNET_NETWORK_PASSPHRASE};
pub use error::Error;
pub use models::{DomainRecord, DomainResult, SubDomainRecord};
pub use node::parse_domain;
pub use resolver::SorobanDomainsSdk;
pub use rpc::{RpcClient, SorobanRpc};
