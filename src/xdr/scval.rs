//! Soroban contract value (`ScVal`) codec.
//!
//! A closed subset of the on-chain value type: exactly the shapes the
//! domains contract returns and accepts. Unknown discriminants are
//! decode errors, so the set of record shapes stays exhaustively
//! checked at compile time.

use super::{strkey, Reader, Writer, XdrError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

// ScValType discriminants from the Stellar XDR definitions.
const SCV_VOID: u32 = 1;
const SCV_U64: u32 = 5;
const SCV_U128: u32 = 9;
const SCV_BYTES: u32 = 13;
const SCV_SYMBOL: u32 = 15;
const SCV_VEC: u32 = 16;
const SCV_MAP: u32 = 17;
const SCV_ADDRESS: u32 = 18;

const SC_ADDRESS_TYPE_ACCOUNT: u32 = 0;
const SC_ADDRESS_TYPE_CONTRACT: u32 = 1;
const PUBLIC_KEY_TYPE_ED25519: u32 = 0;

/// Maximum length of an `SCSymbol`.
const SYMBOL_LIMIT: u32 = 32;

/// An on-chain address payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScAddress {
    /// An account, keyed by its ed25519 public key.
    Account([u8; 32]),
    /// A contract, keyed by its id hash.
    Contract([u8; 32]),
}

impl ScAddress {
    /// Strkey form: `G...` for accounts, `C...` for contracts.
    pub fn to_strkey(&self) -> String {
        match self {
            ScAddress::Account(key) => strkey::encode_ed25519_public_key(key),
            ScAddress::Contract(hash) => strkey::encode_contract(hash),
        }
    }

    pub fn from_strkey(input: &str) -> Result<Self, XdrError> {
        match input.as_bytes().first() {
            Some(b'G') => Ok(ScAddress::Account(strkey::decode_ed25519_public_key(input)?)),
            Some(b'C') => Ok(ScAddress::Contract(strkey::decode_contract(input)?)),
            _ => Err(XdrError::Strkey("expected a G or C address")),
        }
    }

    pub(crate) fn write(&self, w: &mut Writer) {
        match self {
            ScAddress::Account(key) => {
                w.write_u32(SC_ADDRESS_TYPE_ACCOUNT);
                w.write_u32(PUBLIC_KEY_TYPE_ED25519);
                w.write_fixed(key);
            }
            ScAddress::Contract(hash) => {
                w.write_u32(SC_ADDRESS_TYPE_CONTRACT);
                w.write_fixed(hash);
            }
        }
    }

    pub(crate) fn read(r: &mut Reader) -> Result<Self, XdrError> {
        match r.read_u32()? {
            SC_ADDRESS_TYPE_ACCOUNT => match r.read_u32()? {
                PUBLIC_KEY_TYPE_ED25519 => Ok(ScAddress::Account(r.read_fixed()?)),
                other => Err(XdrError::UnsupportedDiscriminant(other)),
            },
            SC_ADDRESS_TYPE_CONTRACT => Ok(ScAddress::Contract(r.read_fixed()?)),
            other => Err(XdrError::UnsupportedDiscriminant(other)),
        }
    }
}

/// A Soroban contract value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScVal {
    Void,
    U64(u64),
    U128(u128),
    Bytes(Vec<u8>),
    Symbol(String),
    Vec(Vec<ScVal>),
    Map(Vec<(ScVal, ScVal)>),
    Address(ScAddress),
}

impl ScVal {
    pub(crate) fn write(&self, w: &mut Writer) -> Result<(), XdrError> {
        match self {
            ScVal::Void => w.write_u32(SCV_VOID),
            ScVal::U64(value) => {
                w.write_u32(SCV_U64);
                w.write_u64(*value);
            }
            ScVal::U128(value) => {
                w.write_u32(SCV_U128);
                w.write_u64((value >> 64) as u64);
                w.write_u64(*value as u64);
            }
            ScVal::Bytes(data) => {
                w.write_u32(SCV_BYTES);
                w.write_var_bytes(data);
            }
            ScVal::Symbol(name) => {
                if name.len() > SYMBOL_LIMIT as usize {
                    return Err(XdrError::LengthOutOfRange(name.len() as u32));
                }
                w.write_u32(SCV_SYMBOL);
                w.write_string(name);
            }
            ScVal::Vec(items) => {
                w.write_u32(SCV_VEC);
                w.write_u32(1); // vec is present
                w.write_u32(items.len() as u32);
                for item in items {
                    item.write(w)?;
                }
            }
            ScVal::Map(entries) => {
                w.write_u32(SCV_MAP);
                w.write_u32(1); // map is present
                w.write_u32(entries.len() as u32);
                for (key, value) in entries {
                    key.write(w)?;
                    value.write(w)?;
                }
            }
            ScVal::Address(address) => {
                w.write_u32(SCV_ADDRESS);
                address.write(w);
            }
        }
        Ok(())
    }

    pub(crate) fn read(r: &mut Reader) -> Result<Self, XdrError> {
        match r.read_u32()? {
            SCV_VOID => Ok(ScVal::Void),
            SCV_U64 => Ok(ScVal::U64(r.read_u64()?)),
            SCV_U128 => {
                let hi = r.read_u64()?;
                let lo = r.read_u64()?;
                Ok(ScVal::U128((u128::from(hi) << 64) | u128::from(lo)))
            }
            SCV_BYTES => Ok(ScVal::Bytes(r.read_var_bytes(u32::MAX)?)),
            SCV_SYMBOL => Ok(ScVal::Symbol(r.read_string(SYMBOL_LIMIT)?)),
            SCV_VEC => {
                if r.read_u32()? == 0 {
                    return Ok(ScVal::Vec(Vec::new()));
                }
                let count = r.read_count()?;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(ScVal::read(r)?);
                }
                Ok(ScVal::Vec(items))
            }
            SCV_MAP => {
                if r.read_u32()? == 0 {
                    return Ok(ScVal::Map(Vec::new()));
                }
                let count = r.read_count()?;
                let mut entries = Vec::with_capacity(count);
                for _ in 0..count {
                    let key = ScVal::read(r)?;
                    let value = ScVal::read(r)?;
                    entries.push((key, value));
                }
                Ok(ScVal::Map(entries))
            }
            SCV_ADDRESS => Ok(ScVal::Address(ScAddress::read(r)?)),
            other => Err(XdrError::UnsupportedDiscriminant(other)),
        }
    }

    /// Encode as base64 XDR, the transport form Soroban RPC speaks.
    pub fn to_xdr_base64(&self) -> Result<String, XdrError> {
        let mut w = Writer::new();
        self.write(&mut w)?;
        Ok(BASE64.encode(w.into_inner()))
    }

    /// Decode from base64 XDR, rejecting trailing bytes.
    pub fn from_xdr_base64(input: &str) -> Result<Self, XdrError> {
        let raw = BASE64.decode(input.trim())?;
        let mut r = Reader::new(&raw);
        let value = ScVal::read(&mut r)?;
        r.finish()?;
        Ok(value)
    }

    fn type_name(&self) -> &'static str {
        match self {
            ScVal::Void => "void",
            ScVal::U64(_) => "u64",
            ScVal::U128(_) => "u128",
            ScVal::Bytes(_) => "bytes",
            ScVal::Symbol(_) => "symbol",
            ScVal::Vec(_) => "vec",
            ScVal::Map(_) => "map",
            ScVal::Address(_) => "address",
        }
    }

    fn mismatch(&self, expected: &'static str) -> XdrError {
        XdrError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }

    pub fn as_symbol(&self) -> Result<&str, XdrError> {
        match self {
            ScVal::Symbol(name) => Ok(name.as_str()),
            other => Err(other.mismatch("symbol")),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], XdrError> {
        match self {
            ScVal::Bytes(data) => Ok(data.as_slice()),
            other => Err(other.mismatch("bytes")),
        }
    }

    pub fn as_u64(&self) -> Result<u64, XdrError> {
        match self {
            ScVal::U64(value) => Ok(*value),
            other => Err(other.mismatch("u64")),
        }
    }

    pub fn as_u128(&self) -> Result<u128, XdrError> {
        match self {
            ScVal::U128(value) => Ok(*value),
            other => Err(other.mismatch("u128")),
        }
    }

    pub fn as_address(&self) -> Result<&ScAddress, XdrError> {
        match self {
            ScVal::Address(address) => Ok(address),
            other => Err(other.mismatch("address")),
        }
    }

    pub fn as_vec(&self) -> Result<&[ScVal], XdrError> {
        match self {
            ScVal::Vec(items) => Ok(items.as_slice()),
            other => Err(other.mismatch("vec")),
        }
    }

    pub fn as_map(&self) -> Result<&[(ScVal, ScVal)], XdrError> {
        match self {
            ScVal::Map(entries) => Ok(entries.as_slice()),
            other => Err(other.mismatch("map")),
        }
    }

    /// Look up a map entry by symbol key.
    pub fn map_get(&self, key: &str) -> Result<&ScVal, XdrError> {
        self.as_map()?
            .iter()
            .find(|(k, _)| matches!(k, ScVal::Symbol(name) if name == key))
            .map(|(_, value)| value)
            .ok_or_else(|| XdrError::MissingMapKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Return value of the registry's `record` function for a top-level
    // domain, captured as base64 XDR.
    const DOMAIN_RECORD_XDR: &str = "AAAAEAAAAAEAAAACAAAADwAAAAZEb21haW4AAAAAABEAAAABAAAABgAAAA8AAAAHYWRkcmVzcwAAAAASAAAAAAAAAAACAgICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgAAAA8AAAAKY29sbGF0ZXJhbAAAAAAACQAAAAAAAABAAAAAAAAAAAUAAAAPAAAACGV4cF9kYXRlAAAABQAAAABndIWAAAAADwAAAARub2RlAAAADQAAACDcdaS86ecp+oHzlPheLQng5H17Cy87vV/+iu+IztueygAAAA8AAAAFb3duZXIAAAAAAAASAAAAAAAAAAABAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQAAAA8AAAAIc25hcHNob3QAAAAFAAAAAAAA2QM=";

    #[test]
    fn test_decode_domain_record_value() {
        let value = ScVal::from_xdr_base64(DOMAIN_RECORD_XDR).unwrap();
        let items = value.as_vec().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_symbol().unwrap(), "Domain");

        let fields = &items[1];
        assert_eq!(fields.as_map().unwrap().len(), 6);
        assert_eq!(fields.map_get("exp_date").unwrap().as_u64().unwrap(), 1735689600);
        assert_eq!(fields.map_get("snapshot").unwrap().as_u64().unwrap(), 55555);
        assert_eq!(
            fields.map_get("collateral").unwrap().as_u128().unwrap(),
            (1u128 << 70) + 5
        );
        assert_eq!(
            fields.map_get("owner").unwrap().as_address().unwrap(),
            &ScAddress::Account([0x01; 32])
        );
        assert_eq!(fields.map_get("node").unwrap().as_bytes().unwrap().len(), 32);
    }

    #[test]
    fn test_encode_call_arguments() {
        let node = hex::decode("dc75a4bce9e729fa81f394f85e2d09e0e47d7b0b2f3bbd5ffe8aef88cedb9eca")
            .unwrap();
        let args = ScVal::Vec(vec![
            ScVal::Symbol("Record".to_string()),
            ScVal::Bytes(node),
        ]);
        assert_eq!(
            args.to_xdr_base64().unwrap(),
            "AAAAEAAAAAEAAAACAAAADwAAAAZSZWNvcmQAAAAAAA0AAAAg3HWkvOnnKfqB85T4Xi0J4OR9ewsvO71f/orviM7bnso="
        );
    }

    #[test]
    fn test_void_decodes_but_is_not_a_vec() {
        let value = ScVal::from_xdr_base64("AAAAAQ==").unwrap();
        assert_eq!(value, ScVal::Void);
        assert!(matches!(
            value.as_vec(),
            Err(XdrError::TypeMismatch { expected: "vec", .. })
        ));
    }

    #[test]
    fn test_unknown_discriminant_is_rejected() {
        // SCV_I256 (12) is outside the supported subset
        let mut w = Writer::new();
        w.write_u32(12);
        let raw = w.into_inner();
        let encoded = BASE64.encode(raw);
        assert!(matches!(
            ScVal::from_xdr_base64(&encoded),
            Err(XdrError::UnsupportedDiscriminant(12))
        ));
    }

    #[test]
    fn test_symbol_longer_than_limit_is_rejected_on_encode() {
        let symbol = ScVal::Symbol("a".repeat(33));
        assert!(matches!(
            symbol.to_xdr_base64(),
            Err(XdrError::LengthOutOfRange(33))
        ));
    }

    #[test]
    fn test_map_get_reports_missing_key() {
        let map = ScVal::Map(vec![(
            ScVal::Symbol("node".to_string()),
            ScVal::U64(1),
        )]);
        assert!(matches!(
            map.map_get("owner"),
            Err(XdrError::MissingMapKey(_))
        ));
    }

    #[test]
    fn test_address_strkey_round_trip() {
        let address = ScAddress::Contract([0x07; 32]);
        let strkey = address.to_strkey();
        assert!(strkey.starts_with('C'));
        assert_eq!(ScAddress::from_strkey(&strkey).unwrap(), address);
    }
}
