//! Stellar strkey encoding for account and contract addresses.
//!
//! A strkey is base32 (RFC 4648 alphabet, no padding) over a version
//! byte, a 32-byte payload and a little-endian CRC16-XModem checksum.

use super::XdrError;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

// Version bytes pick the leading character of the encoded form.
const VERSION_ED25519_PUBLIC_KEY: u8 = 6 << 3; // 'G'
const VERSION_CONTRACT: u8 = 2 << 3; // 'C'

/// Encode an ed25519 public key as a `G...` account strkey.
pub fn encode_ed25519_public_key(key: &[u8; 32]) -> String {
    encode(VERSION_ED25519_PUBLIC_KEY, key)
}

/// Decode a `G...` account strkey into its ed25519 public key.
pub fn decode_ed25519_public_key(input: &str) -> Result<[u8; 32], XdrError> {
    decode(VERSION_ED25519_PUBLIC_KEY, input)
}

/// Encode a contract id hash as a `C...` contract strkey.
pub fn encode_contract(hash: &[u8; 32]) -> String {
    encode(VERSION_CONTRACT, hash)
}

/// Decode a `C...` contract strkey into its id hash.
pub fn decode_contract(input: &str) -> Result<[u8; 32], XdrError> {
    decode(VERSION_CONTRACT, input)
}

fn encode(version: u8, payload: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(35);
    data.push(version);
    data.extend_from_slice(payload);
    let crc = crc16_xmodem(&data);
    data.push((crc & 0xFF) as u8);
    data.push((crc >> 8) as u8);
    base32_encode(&data)
}

fn decode(version: u8, input: &str) -> Result<[u8; 32], XdrError> {
    let data = base32_decode(input)?;
    if data.len() != 35 {
        return Err(XdrError::Strkey("wrong length"));
    }
    let (body, checksum) = data.split_at(33);
    let crc = crc16_xmodem(body);
    if checksum != [(crc & 0xFF) as u8, (crc >> 8) as u8] {
        return Err(XdrError::Strkey("checksum mismatch"));
    }
    if body[0] != version {
        return Err(XdrError::Strkey("unexpected version byte"));
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&body[1..]);
    Ok(key)
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((acc >> bits) & 0x1F) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((acc << (5 - bits)) & 0x1F) as usize] as char);
    }
    out
}

fn base32_decode(input: &str) -> Result<Vec<u8>, XdrError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for byte in input.bytes() {
        let value = ALPHABET
            .iter()
            .position(|&a| a == byte)
            .ok_or(XdrError::Strkey("invalid base32 character"))? as u32;
        acc = (acc << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    // leftover bits are padding and must be zero
    if bits > 0 && acc & ((1 << bits) - 1) != 0 {
        return Err(XdrError::Strkey("invalid trailing bits"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_key_matches_known_address() {
        assert_eq!(
            encode_ed25519_public_key(&[0u8; 32]),
            "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF"
        );
    }

    #[test]
    fn test_account_round_trip() {
        let mut key = [0u8; 32];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let encoded = encode_ed25519_public_key(&key);
        assert_eq!(
            encoded,
            "GAAACAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUPB7JZX"
        );
        assert_eq!(decode_ed25519_public_key(&encoded).unwrap(), key);
    }

    #[test]
    fn test_contract_round_trip() {
        let hash = [0xAB; 32];
        let encoded = encode_contract(&hash);
        assert_eq!(
            encoded,
            "CCV2XK5LVOV2XK5LVOV2XK5LVOV2XK5LVOV2XK5LVOV2XK5LVOV2XMCW"
        );
        assert_eq!(decode_contract(&encoded).unwrap(), hash);
    }

    #[test]
    fn test_decode_rejects_corrupted_checksum() {
        let mut encoded = encode_ed25519_public_key(&[7u8; 32]);
        // flip a payload character
        let replacement = if encoded.ends_with('A') { 'B' } else { 'A' };
        encoded.pop();
        encoded.push(replacement);
        assert!(decode_ed25519_public_key(&encoded).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_version() {
        let contract = encode_contract(&[1u8; 32]);
        assert!(matches!(
            decode_ed25519_public_key(&contract),
            Err(XdrError::Strkey("unexpected version byte"))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        assert!(decode_ed25519_public_key("G!!!").is_err());
    }
}
