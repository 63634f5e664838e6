//! Read-only transaction plumbing for contract-call simulation.
//!
//! Builds the unsigned envelope `simulateTransaction` expects and
//! encodes the ledger key used to load the source account. Nothing here
//! signs or submits.

use super::scval::{ScAddress, ScVal};
use super::{strkey, Reader, Writer, XdrError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;

// Envelope and operation discriminants from the Stellar XDR definitions.
const ENVELOPE_TYPE_TX: u32 = 2;
const KEY_TYPE_ED25519: u32 = 0;
const PUBLIC_KEY_TYPE_ED25519: u32 = 0;
const PRECOND_NONE: u32 = 0;
const PRECOND_TIME: u32 = 1;
const MEMO_NONE: u32 = 0;
const OP_INVOKE_HOST_FUNCTION: u32 = 24;
const HOST_FUNCTION_TYPE_INVOKE_CONTRACT: u32 = 0;
const LEDGER_ENTRY_TYPE_ACCOUNT: u32 = 0;

/// Account state needed to source a simulated transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account id, `G...` strkey.
    pub account_id: String,
    /// Current sequence number on ledger.
    pub sequence: i64,
}

/// An unsigned contract-invocation transaction, ready for simulation.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Source account id, `G...` strkey.
    pub source_account: String,
    /// Network the transaction targets.
    pub network_passphrase: String,
    /// Base fee in stroops.
    pub fee: u32,
    pub seq_num: i64,
    /// `(min_time, max_time)` validity window, when bounded.
    pub time_bounds: Option<(u64, u64)>,
    /// Contract id, `C...` strkey.
    pub contract_id: String,
    pub function_name: String,
    pub args: Vec<ScVal>,
}

impl Transaction {
    /// Encode as a base64 `TransactionEnvelope` with no signatures.
    pub fn to_envelope_base64(&self) -> Result<String, XdrError> {
        let source = strkey::decode_ed25519_public_key(&self.source_account)?;
        let contract = strkey::decode_contract(&self.contract_id)?;

        let mut w = Writer::new();
        w.write_u32(ENVELOPE_TYPE_TX);
        w.write_u32(KEY_TYPE_ED25519);
        w.write_fixed(&source);
        w.write_u32(self.fee);
        w.write_i64(self.seq_num);
        match self.time_bounds {
            Some((min_time, max_time)) => {
                w.write_u32(PRECOND_TIME);
                w.write_u64(min_time);
                w.write_u64(max_time);
            }
            None => w.write_u32(PRECOND_NONE),
        }
        w.write_u32(MEMO_NONE);

        // a single invoke-host-function operation
        w.write_u32(1);
        w.write_u32(0); // operation source account: inherit
        w.write_u32(OP_INVOKE_HOST_FUNCTION);
        w.write_u32(HOST_FUNCTION_TYPE_INVOKE_CONTRACT);
        ScAddress::Contract(contract).write(&mut w);
        w.write_string(&self.function_name);
        w.write_u32(self.args.len() as u32);
        for arg in &self.args {
            arg.write(&mut w)?;
        }
        w.write_u32(0); // no authorization entries

        w.write_u32(0); // transaction ext: v0
        w.write_u32(0); // no signatures
        Ok(BASE64.encode(w.into_inner()))
    }
}

/// Builder over [`Transaction`], mirroring the shape of the hosted
/// Stellar SDKs' transaction builders.
#[derive(Debug)]
pub struct TransactionBuilder {
    source: Account,
    network_passphrase: String,
    base_fee: u32,
    timeout: u64,
    invocation: Option<(String, String, Vec<ScVal>)>,
}

impl TransactionBuilder {
    pub fn new(source: Account, network_passphrase: &str, base_fee: u32) -> Self {
        Self {
            source,
            network_passphrase: network_passphrase.to_string(),
            base_fee,
            timeout: 0,
            invocation: None,
        }
    }

    /// Set the single contract invocation this transaction performs.
    pub fn invoke_contract_function(
        mut self,
        contract_id: &str,
        function_name: &str,
        args: Vec<ScVal>,
    ) -> Self {
        self.invocation = Some((
            contract_id.to_string(),
            function_name.to_string(),
            args,
        ));
        self
    }

    /// Validity window in seconds from now. Zero leaves the window
    /// open.
    pub fn set_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Transaction, XdrError> {
        let (contract_id, function_name, args) =
            self.invocation.ok_or(XdrError::MissingOperation)?;
        let time_bounds = match self.timeout {
            0 => None,
            timeout => Some((0, Utc::now().timestamp() as u64 + timeout)),
        };
        Ok(Transaction {
            source_account: self.source.account_id,
            network_passphrase: self.network_passphrase,
            fee: self.base_fee,
            seq_num: self.source.sequence + 1,
            time_bounds,
            contract_id,
            function_name,
            args,
        })
    }
}

/// Base64 `LedgerKey` addressing an account entry.
pub fn account_ledger_key_base64(account_id: &str) -> Result<String, XdrError> {
    let key = strkey::decode_ed25519_public_key(account_id)?;
    let mut w = Writer::new();
    w.write_u32(LEDGER_ENTRY_TYPE_ACCOUNT);
    w.write_u32(PUBLIC_KEY_TYPE_ED25519);
    w.write_fixed(&key);
    Ok(BASE64.encode(w.into_inner()))
}

/// Pull the sequence number out of a base64 account `LedgerEntryData`.
///
/// Only the leading fields are decoded; the rest of the entry is
/// ignored.
pub fn account_sequence_from_entry(xdr_base64: &str) -> Result<i64, XdrError> {
    let raw = BASE64.decode(xdr_base64.trim())?;
    let mut r = Reader::new(&raw);
    let entry_type = r.read_u32()?;
    if entry_type != LEDGER_ENTRY_TYPE_ACCOUNT {
        return Err(XdrError::UnsupportedDiscriminant(entry_type));
    }
    let key_type = r.read_u32()?;
    if key_type != PUBLIC_KEY_TYPE_ED25519 {
        return Err(XdrError::UnsupportedDiscriminant(key_type));
    }
    let _account_id: [u8; 32] = r.read_fixed()?;
    let _balance = r.read_i64()?;
    r.read_i64()
}
