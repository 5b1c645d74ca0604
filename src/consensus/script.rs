//! Script construction
//!
//! Only the builder side of scripts is needed here: coinbase input scripts and
//! pay-to-pubkey output scripts. No interpretation happens in this crate.

use serde::{Deserialize, Serialize};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an integer the way the reference client does: small values
    /// become OP_0 / OP_1NEGATE / OP_1..OP_16, anything else a number push.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8) - 1),
            _ => return self.push_slice(&script_num_bytes(n)),
        }
        self
    }

    /// Push a script number as data, never as a small-integer opcode
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    /// Push raw data with the shortest length prefix
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign; add a byte if the magnitude already uses it.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_encoding() {
        assert!(script_num_bytes(0).is_empty());
        assert_eq!(script_num_bytes(4), vec![0x04]);
        assert_eq!(script_num_bytes(-1), vec![0x81]);
        assert_eq!(script_num_bytes(0x80), vec![0x80, 0x00]);
        assert_eq!(script_num_bytes(-0x80), vec![0x80, 0x80]);
        assert_eq!(script_num_bytes(486604799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_int_small_values_use_opcodes() {
        let script = Script::new().push_int(0).push_int(-1).push_int(1).push_int(16);
        assert_eq!(script.as_bytes(), &[OP_0, OP_1NEGATE, OP_1, OP_1 + 15]);
    }

    #[test]
    fn test_push_script_num_is_data_push() {
        let script = Script::new().push_script_num(4);
        assert_eq!(script.as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn test_coinbase_prefix_matches_reference_layout() {
        let script = Script::new().push_int(486604799).push_script_num(4);
        assert_eq!(hex::encode(script.as_bytes()), "04ffff001d0104");
    }

    #[test]
    fn test_push_slice_length_prefixes() {
        assert_eq!(Script::new().push_slice(&[7u8; 75]).len(), 76);
        let medium = Script::new().push_slice(&[7u8; 76]);
        assert_eq!(&medium.as_bytes()[..2], &[OP_PUSHDATA1, 76]);
        let large = Script::new().push_slice(&[7u8; 300]);
        assert_eq!(&large.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }
}
