//! Domain models for IPv4 subnet checks.
//!
//! - [`Ipv4`] - base address with a prefix length
//! - mask helpers used by [`crate::subnet`]

mod ipv4;

// Re-export public types
pub use ipv4::{
    broadcast_addr, calculate_mask, cut_addr, get_cidr_mask, masked_eq, Ipv4, MAX_LENGTH,
};
