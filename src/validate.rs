//! Format validation for dotted-quad addresses and CIDR notation.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;

lazy_static! {
    static ref IP_RE: Regex = Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$"
    )
    .expect("Invalid Regex?");
    static ref CIDR_RE: Regex = Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)/([0-9]|[1-2][0-9]|3[0-2])$"
    )
    .expect("Invalid Regex?");
}

/// True iff `ip` is four dot separated octets, each 0-255.
pub fn validate_ip(ip: &str) -> bool {
    IP_RE.is_match(ip)
}

/// True iff `input` is a valid address followed by `/` and a prefix 0-32.
pub fn validate_cidr(input: &str) -> bool {
    CIDR_RE.is_match(input)
}

/// Parse a validated dotted-quad string.
///
/// Leading zeros are read as decimal, so `010.0.0.1` is `10.0.0.1`.
pub fn parse_ip(ip: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    if !validate_ip(ip) {
        return Err(format!("Invalid IP address: {ip}").into());
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(ip.split('.')) {
        *octet = part.parse()?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Split a validated CIDR string into the base address and prefix length.
pub fn split_cidr(input: &str) -> Result<(String, u8), Box<dyn Error>> {
    if !validate_cidr(input) {
        return Err(format!("Invalid CIDR format: {input}").into());
    }
    let (base_ip, prefix) = input
        .split_once('/')
        .ok_or_else(|| format!("Missing prefix length: {input}"))?;
    Ok((base_ip.to_string(), prefix.parse()?))
}
