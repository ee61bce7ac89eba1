//! IPv4 subnet math.
//!
//! Provides [`Ipv4`] for a base address with a prefix length, and the mask
//! helpers used for subnet membership checks.

use crate::validate::{parse_ip, split_cidr};
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_subnet_check::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a CIDR prefix length to the four mask bytes, most significant first.
///
/// Whole groups of 8 bits give `0xFF`, a partial group sets only its high bits.
///
/// # Examples
/// ```
/// use ip_subnet_check::models::calculate_mask;
/// assert_eq!(calculate_mask(20).unwrap(), [255, 255, 240, 0]);
/// ```
pub fn calculate_mask(len: u8) -> Result<[u8; 4], Box<dyn Error>> {
    Ok(get_cidr_mask(len)?.to_be_bytes())
}

/// True when both addresses have the same bytes under `mask`.
pub fn masked_eq(a: Ipv4Addr, b: Ipv4Addr, mask: [u8; 4]) -> bool {
    a.octets()
        .iter()
        .zip(b.octets().iter())
        .zip(mask.iter())
        .all(|((a, b), m)| a & m == b & m)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 base address with a prefix length, as entered by the user.
///
/// The address is kept as given, host bits included. Use [`Ipv4::network`]
/// for the masked network address.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The base address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let (base_ip, mask) = split_cidr(addr_cidr)?;
        let addr = parse_ip(&base_ip)?;
        Ok(Ipv4 { addr, mask })
    }

    /// The four mask bytes for this prefix.
    pub fn mask_bytes(&self) -> Result<[u8; 4], Box<dyn Error>> {
        calculate_mask(self.mask)
    }

    /// The subnet mask in dotted-quad form.
    pub fn netmask(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        Ok(Ipv4Addr::from(self.mask_bytes()?))
    }

    /// The lowest (network) address in the subnet.
    pub fn network(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        cut_addr(self.addr, self.mask)
    }

    /// The highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        broadcast_addr(self.addr, self.mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_calculate_mask() {
        assert_eq!(calculate_mask(24).unwrap(), [255, 255, 255, 0]);
        assert_eq!(calculate_mask(0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(calculate_mask(32).unwrap(), [255, 255, 255, 255]);
        assert_eq!(calculate_mask(20).unwrap(), [255, 255, 240, 0]);
        assert_eq!(calculate_mask(1).unwrap(), [128, 0, 0, 0]);
        assert_eq!(calculate_mask(9).unwrap(), [255, 128, 0, 0]);
        assert_eq!(calculate_mask(31).unwrap(), [255, 255, 255, 254]);
        assert_eq!(
            calculate_mask(33).unwrap_err().to_string(),
            "Network length is too long"
        );
    }

    #[test]
    fn test_calculate_mask_leading_ones() {
        for len in 0..=MAX_LENGTH {
            let mask = u32::from_be_bytes(calculate_mask(len).unwrap());
            assert_eq!(mask.leading_ones(), len as u32, "prefix /{len}");
            assert_eq!(mask.count_ones(), len as u32, "prefix /{len}");
        }
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 20).unwrap(),
            Ipv4Addr::new(192, 168, 15, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_ipv4_new() {
        let net = Ipv4::new("192.168.15.7/24").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(192, 168, 15, 7));
        assert_eq!(net.mask, 24);
        assert_eq!(net.to_string(), "192.168.15.7/24");
        assert_eq!(net.network().unwrap(), Ipv4Addr::new(192, 168, 15, 0));
        assert_eq!(net.broadcast().unwrap(), Ipv4Addr::new(192, 168, 15, 255));
        assert_eq!(net.netmask().unwrap(), Ipv4Addr::new(255, 255, 255, 0));

        assert!(Ipv4::new("192.168.15.0").is_err());
        assert!(Ipv4::new("192.168.15.0/33").is_err());
        assert!(Ipv4::new("256.168.15.0/24").is_err());
    }
}
