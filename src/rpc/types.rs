//! Types for JSON-RPC communication with a Soroban RPC server.

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Request a read-only simulation of an encoded transaction
    /// envelope.
    pub fn simulate_transaction(envelope_base64: String, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "simulateTransaction".to_string(),
            params: serde_json::json!({ "transaction": envelope_base64 }),
            id,
        }
    }

    /// Fetch ledger entries by their encoded keys.
    pub fn get_ledger_entries(keys: Vec<String>, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "getLedgerEntries".to_string(),
            params: serde_json::json!({ "keys": keys }),
            id,
        }
    }
}

/// JSON-RPC 2.0 response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Result payload of `simulateTransaction`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateTransactionResponse {
    /// Set when the host function failed to execute.
    #[serde(default)]
    pub error: Option<String>,

    /// One entry per host function invoked; a single entry here.
    #[serde(default)]
    pub results: Vec<SimulateHostFunctionResult>,

    #[serde(default)]
    pub latest_ledger: u64,
}

/// One host-function result within a simulation response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateHostFunctionResult {
    /// Base64 XDR of the function's return value.
    #[serde(default)]
    pub xdr: Option<String>,
}

/// Result payload of `getLedgerEntries`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLedgerEntriesResponse {
    /// Absent when none of the requested keys exist.
    #[serde(default)]
    pub entries: Option<Vec<LedgerEntryResult>>,

    #[serde(default)]
    pub latest_ledger: u64,
}

/// A single ledger entry returned by `getLedgerEntries`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryResult {
    #[serde(default)]
    pub key: Option<String>,

    /// Base64 XDR of the entry data.
    pub xdr: String,

    #[serde(default)]
    pub last_modified_ledger_seq: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulation_response() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 2,
            "result": {
                "results": [{"xdr": "AAAAAQ==", "auth": []}],
                "latestLedger": 2552139,
                "transactionData": "...",
                "minResourceFee": "58181"
            }
        }"#;
        let response: JsonRpcResponse<SimulateTransactionResponse> =
            serde_json::from_str(raw).unwrap();
        let result = response.result.unwrap();
        assert!(result.error.is_none());
        assert_eq!(result.results[0].xdr.as_deref(), Some("AAAAAQ=="));
        assert_eq!(result.latest_ledger, 2552139);
    }

    #[test]
    fn test_parse_simulation_error_response() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 2,
            "result": {"error": "host invocation failed", "latestLedger": 7}
        }"#;
        let response: JsonRpcResponse<SimulateTransactionResponse> =
            serde_json::from_str(raw).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.error.as_deref(), Some("host invocation failed"));
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_parse_ledger_entries_with_null_entries() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"entries": null, "latestLedger": 12}
        }"#;
        let response: JsonRpcResponse<GetLedgerEntriesResponse> =
            serde_json::from_str(raw).unwrap();
        assert!(response.result.unwrap().entries.is_none());
    }

    #[test]
    fn test_simulate_request_shape() {
        let request = JsonRpcRequest::simulate_transaction("AAAA".to_string(), 7);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "simulateTransaction");
        assert_eq!(json["params"]["transaction"], "AAAA");
        assert_eq!(json["id"], 7);
    }
}
