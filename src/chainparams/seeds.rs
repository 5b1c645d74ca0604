//! Seed Node Configuration
//!
//! DNS seeds and compiled-in fixed seed tables for initial peer discovery.
//! New nodes fall back to the fixed seeds only when DNS seeding fails; once
//! connected they learn fresher addresses from peers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// One week in seconds
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Size of one packed seed record: 16-byte address + big-endian port
pub const PACKED_SEED_SIZE: usize = 18;

/// A DNS seed descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Display name of the seed operator
    pub name: String,
    /// Host to resolve
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// Fixed seed record as compiled into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    /// IPv6 address, IPv4 addresses in the ::ffff:0:0/96 mapped form
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    /// IPv4 seed stored in mapped form
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        Self {
            addr: [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets[0], octets[1], octets[2],
                octets[3],
            ],
            port,
        }
    }

    /// Decode one packed record
    pub fn from_packed(record: &[u8; PACKED_SEED_SIZE]) -> Self {
        let mut addr = [0u8; 16];
        addr.copy_from_slice(&record[..16]);
        Self {
            addr,
            port: u16::from_be_bytes([record[16], record[17]]),
        }
    }

    pub fn to_packed(&self) -> [u8; PACKED_SEED_SIZE] {
        let mut record = [0u8; PACKED_SEED_SIZE];
        record[..16].copy_from_slice(&self.addr);
        record[16..].copy_from_slice(&self.port.to_be_bytes());
        record
    }
}

/// Split a packed seed table into records.
///
/// The table is a compiled-in constant, so a length that is not a whole
/// number of records is a build defect and panics.
pub fn parse_packed_table(table: &[u8]) -> Vec<SeedSpec> {
    assert!(
        table.len() % PACKED_SEED_SIZE == 0,
        "packed seed table length {} is not a multiple of {}",
        table.len(),
        PACKED_SEED_SIZE
    );
    table
        .chunks_exact(PACKED_SEED_SIZE)
        .map(|chunk| {
            let mut record = [0u8; PACKED_SEED_SIZE];
            record.copy_from_slice(chunk);
            SeedSpec::from_packed(&record)
        })
        .collect()
}

/// A fixed seed ready for the address manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub ip: Ipv6Addr,
    pub port: u16,
    /// Unix time the address is claimed to have been seen
    pub last_seen: i64,
}

impl SeedAddress {
    /// Socket address, unwrapping IPv4-mapped addresses
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Convert fixed seed records into addresses with randomized `last_seen`.
///
/// Each seed gets a time in `[now - 2 weeks, now - 1 week)`, so the node only
/// falls back to one or two of them and prefers anything it hears about later.
pub fn convert_seeds(specs: &[SeedSpec]) -> Vec<SeedAddress> {
    convert_seeds_at(specs, unix_now(), &mut rand::thread_rng())
}

/// [`convert_seeds`] with an explicit clock and random source
pub fn convert_seeds_at<R: Rng>(specs: &[SeedSpec], now: i64, rng: &mut R) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| SeedAddress {
            ip: Ipv6Addr::from(spec.addr),
            port: spec.port,
            last_seen: now - ONE_WEEK - rng.gen_range(1..=ONE_WEEK),
        })
        .collect()
}

pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_ipv4_mapping() {
        let spec = SeedSpec::ipv4([104, 156, 231, 213], 41184);
        let seeds = convert_seeds_at(&[spec], NOW, &mut StdRng::seed_from_u64(1));
        assert_eq!(seeds[0].socket_addr().to_string(), "104.156.231.213:41184");
    }

    #[test]
    fn test_ipv6_passthrough() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 1;
        let spec = SeedSpec { addr, port: 8 };
        let seeds = convert_seeds_at(&[spec], NOW, &mut StdRng::seed_from_u64(1));
        assert_eq!(seeds[0].socket_addr().to_string(), "[2001::1]:8");
    }

    #[test]
    fn test_last_seen_window() {
        let specs = vec![SeedSpec::ipv4([1, 2, 3, 4], 1); 500];
        let seeds = convert_seeds_at(&specs, NOW, &mut StdRng::seed_from_u64(42));
        assert_eq!(seeds.len(), 500);
        for seed in &seeds {
            assert!(seed.last_seen >= NOW - 2 * ONE_WEEK);
            assert!(seed.last_seen < NOW - ONE_WEEK);
        }
    }

    #[test]
    fn test_last_seen_is_decorrelated() {
        let specs = vec![SeedSpec::ipv4([1, 2, 3, 4], 1); 32];
        let seeds = convert_seeds_at(&specs, NOW, &mut StdRng::seed_from_u64(7));
        assert!(seeds.iter().any(|s| s.last_seen != seeds[0].last_seen));
    }

    #[test]
    fn test_packed_record_layout() {
        let spec = SeedSpec::ipv4([45, 77, 7, 67], 41184);
        let packed = spec.to_packed();
        assert_eq!(&packed[10..16], &[0xff, 0xff, 45, 77, 7, 67]);
        assert_eq!(&packed[16..], &[0xa0, 0xe0]);
        assert_eq!(SeedSpec::from_packed(&packed), spec);
    }

    #[test]
    fn test_parse_packed_table() {
        let mut table = Vec::new();
        table.extend_from_slice(&SeedSpec::ipv4([1, 1, 1, 1], 1).to_packed());
        table.extend_from_slice(&SeedSpec::ipv4([2, 2, 2, 2], 2).to_packed());
        let specs = parse_packed_table(&table);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].port, 2);
    }

    #[test]
    #[should_panic(expected = "not a multiple")]
    fn test_parse_packed_table_truncated() {
        parse_packed_table(&[0u8; 20]);
    }
}
