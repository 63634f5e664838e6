//! RPC collaborator layer.
//!
//! [`SorobanRpc`] is the seam the resolver depends on; [`RpcClient`] is
//! the blocking HTTP implementation of it.

pub mod client;
pub mod types;

pub use client::{RpcClient, SorobanRpc};
pub use types::{SimulateHostFunctionResult, SimulateTransactionResponse};
