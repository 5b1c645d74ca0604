//! Transaction structure and wire serialization
//!
//! Just enough of the transaction format to serialize a coinbase exactly as
//! the reference client does and derive its id.

use serde::{Deserialize, Serialize};

use super::script::Script;
use crate::crypto::{double_sha256, Hash};

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends
    pub const fn null() -> Self {
        Self { txid: Hash::zero(), vout: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: i64,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction with a single input and output
    pub fn coinbase(script_sig: Script, value: i64, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            inputs: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut { value, script_pubkey }],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    /// Serialize in the network wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(256);
        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(input.previous_output.txid.as_bytes());
            bytes.extend_from_slice(&input.previous_output.vout.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut bytes, &output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction id (double SHA-256 of the wire encoding)
    pub fn txid(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }

    pub fn total_output(&self) -> i64 {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

fn write_script(buf: &mut Vec<u8>, script: &Script) {
    write_compact_size(buf, script.len() as u64);
    buf.extend_from_slice(script.as_bytes());
}

/// Variable-length integer used for counts and lengths on the wire
pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_size_boundaries() {
        let encode = |n| {
            let mut buf = Vec::new();
            write_compact_size(&mut buf, n);
            buf
        };
        assert_eq!(encode(0xfc), vec![0xfc]);
        assert_eq!(encode(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encode(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode(0x1_0000_0000).len(), 9);
    }

    #[test]
    fn test_coinbase_detection() {
        let tx = Transaction::coinbase(Script::new().push_int(7), 50, Script::new());
        assert!(tx.is_coinbase());
        assert_eq!(tx.total_output(), 50);
    }

    #[test]
    fn test_serialized_layout() {
        let tx = Transaction::coinbase(Script::new(), 1, Script::new());
        let bytes = tx.to_bytes();
        // version, input count, outpoint, script, sequence,
        // output count, value, script, lock_time
        assert_eq!(bytes.len(), 4 + 1 + 36 + 1 + 4 + 1 + 8 + 1 + 4);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[37..41], &[0xff; 4]);
    }

    #[test]
    fn test_txid_changes_with_content() {
        let a = Transaction::coinbase(Script::new().push_int(1), 1, Script::new());
        let b = Transaction::coinbase(Script::new().push_int(2), 1, Script::new());
        assert_ne!(a.txid(), b.txid());
    }
}
