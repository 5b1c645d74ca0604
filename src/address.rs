//! Base58Check encoding with network prefixes
//!
//! Format: Base58(prefix || payload || checksum[0:4]) where the checksum is
//! the double SHA-256 of prefix || payload. The prefix alone tells which
//! network an address or key belongs to.

use crate::chainparams::{Base58Type, NetworkId, NetworkProfile, ParameterRegistry};
use crate::crypto::double_sha256;
use crate::error::AddressError;

const CHECKSUM_LEN: usize = 4;

/// Payload length (after the prefix) expected for each kind
fn payload_len_matches(kind: Base58Type, len: usize) -> bool {
    match kind {
        Base58Type::PubkeyAddress | Base58Type::ScriptAddress => len == 20,
        // Optional trailing 0x01 marks a compressed public key
        Base58Type::SecretKey => len == 32 || len == 33,
        Base58Type::ExtPublicKey | Base58Type::ExtSecretKey => len == 74,
    }
}

/// Encode `data` (prefix already included) with a checksum
pub fn encode_base58check(data: &[u8]) -> String {
    let checksum = double_sha256(data);
    let mut with_checksum = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    with_checksum.extend_from_slice(data);
    with_checksum.extend_from_slice(&checksum.0[..CHECKSUM_LEN]);
    bs58::encode(with_checksum).into_string()
}

/// Decode and verify the checksum, returning prefix || payload
pub fn decode_base58check(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let mut decoded = bs58::decode(encoded).into_vec().map_err(|_| AddressError::Base58)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(AddressError::Length);
    }

    let split = decoded.len() - CHECKSUM_LEN;
    let checksum = double_sha256(&decoded[..split]);
    if decoded[split..] != checksum.0[..CHECKSUM_LEN] {
        return Err(AddressError::Checksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}

impl NetworkProfile {
    /// Encode `payload` with this network's prefix for `kind`
    pub fn encode_base58(&self, kind: Base58Type, payload: &[u8]) -> String {
        let prefix = self.base58_prefix(kind);
        let mut data = Vec::with_capacity(prefix.len() + payload.len());
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);
        encode_base58check(&data)
    }

    /// Decode a string that must carry this network's prefix for `kind`
    pub fn decode_base58(&self, kind: Base58Type, encoded: &str) -> Result<Vec<u8>, AddressError> {
        let data = decode_base58check(encoded)?;
        match_prefix(self, kind, &data).ok_or(AddressError::UnknownPrefix)
    }
}

fn match_prefix(profile: &NetworkProfile, kind: Base58Type, data: &[u8]) -> Option<Vec<u8>> {
    let payload = data.strip_prefix(profile.base58_prefix(kind))?;
    payload_len_matches(kind, payload.len()).then(|| payload.to_vec())
}

/// Detect which network and kind an encoded address or key belongs to.
///
/// Networks are tried in [`NetworkId::ALL`] order, so strings valid for both
/// main and unit-test (which share prefixes) resolve to main.
pub fn network_for_address(
    registry: &ParameterRegistry,
    encoded: &str,
) -> Result<(NetworkId, Base58Type), AddressError> {
    let data = decode_base58check(encoded)?;
    for network in NetworkId::iter() {
        let profile = registry.profile_for(network);
        for kind in Base58Type::ALL {
            if match_prefix(profile, kind, &data).is_some() {
                return Ok((network, kind));
            }
        }
    }
    Err(AddressError::UnknownPrefix)
}
