//! Subnet membership check.

use crate::models::{calculate_mask, masked_eq};
use crate::validate::parse_ip;
use colored::Colorize;
use std::error::Error;

/// True iff `ip` and `base_ip` share every network bit of a `/prefix_len` mask.
///
/// Unparsable addresses or an out of range prefix give `false`.
///
/// # Examples
/// ```
/// use ip_subnet_check::subnet::is_same_subnet;
/// assert!(is_same_subnet("192.168.15.10", "192.168.15.0", 24));
/// assert!(!is_same_subnet("192.168.16.10", "192.168.15.0", 24));
/// ```
pub fn is_same_subnet(ip: &str, base_ip: &str, prefix_len: u8) -> bool {
    match compare(ip, base_ip, prefix_len) {
        Ok(same) => same,
        Err(e) => {
            log::debug!(
                "is_same_subnet({ip}, {base_ip}/{prefix_len}) {failed}: {e}",
                failed = "failed".on_red()
            );
            false
        }
    }
}

fn compare(ip: &str, base_ip: &str, prefix_len: u8) -> Result<bool, Box<dyn Error>> {
    let ip_addr = parse_ip(ip)?;
    let base_addr = parse_ip(base_ip)?;
    let mask = calculate_mask(prefix_len)?;
    Ok(masked_eq(ip_addr, base_addr, mask))
}
