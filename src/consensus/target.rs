//! 256-bit proof-of-work targets
//!
//! Conversions between the compact `bits` field and full targets, plus the
//! per-network proof-of-work ceiling.

use primitive_types::U256;

use crate::crypto::Hash;

/// Proof-of-work limit expressed as `!0 >> shift`
pub fn pow_limit(shift: u32) -> U256 {
    U256::max_value() >> shift as usize
}

/// Decode a compact target. Returns `None` for negative or overflowing encodings.
pub fn target_from_compact(bits: u32) -> Option<U256> {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;

    if word != 0 && bits & 0x0080_0000 != 0 {
        return None;
    }
    if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
        return None;
    }

    let target = if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3)) as usize
    };
    Some(target)
}

/// Encode a target in compact form
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() as u32 + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3)) as usize).low_u32()
    };

    // Mantissa sign bit set: move one byte into the exponent.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | (size << 24)
}

/// Interpret a hash as a 256-bit little-endian number
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_limit_shift() {
        let limit = pow_limit(20);
        assert_eq!(limit.bits(), 236);
        assert_eq!(target_to_compact(limit), 0x1e0fffff);
    }

    #[test]
    fn test_compact_round_trip_of_genesis_bits() {
        let target = target_from_compact(0x1e0ffff0).unwrap();
        assert_eq!(target_to_compact(target), 0x1e0ffff0);
        assert!(target <= pow_limit(20));
    }

    #[test]
    fn test_compact_small_exponent() {
        assert_eq!(target_from_compact(0x01120000), Some(U256::from(0x12)));
        assert_eq!(target_from_compact(0x02123400), Some(U256::from(0x1234)));
    }

    #[test]
    fn test_compact_rejects_negative_and_overflow() {
        assert_eq!(target_from_compact(0x04923456), None);
        assert_eq!(target_from_compact(0xff123456), None);
    }

    #[test]
    fn test_hash_to_u256_is_little_endian() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert_eq!(hash_to_u256(&Hash(bytes)), U256::one());
    }
}
