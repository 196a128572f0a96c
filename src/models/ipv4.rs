//! IPv4 address arithmetic.
//!
//! Pure helpers operating on the numeric (big-endian) value of an address and a
//! prefix length. Everything here works on `u32` and is free of I/O.

use crate::error::CidrError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a subnet mask as u32.
///
/// Lengths past [`MAX_LENGTH`] are treated as /32.
///
/// # Examples
/// ```
/// use cider::models::derive_mask;
/// assert_eq!(derive_mask(24), 0xFFFFFF00);
/// assert_eq!(derive_mask(0), 0);
/// ```
pub fn derive_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Network address: the address with every host bit cleared.
pub fn network_of(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Broadcast address: the network with every host bit set.
pub fn broadcast_of(network: u32, mask: u32) -> u32 {
    network | !mask
}

/// Number of addresses covered by a prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << MAX_LENGTH.saturating_sub(len)
}

/// Usable hosts for a mask: block size minus the network and broadcast addresses.
///
/// /31 and /32 have no usable hosts under this rule and report 0.
pub fn usable_count(mask: u32) -> u64 {
    let size = (!mask) as u64 + 1;
    size.saturating_sub(2)
}

/// Move an address by a signed delta, saturating at 0.0.0.0 and 255.255.255.255.
pub fn offset(addr: u32, delta: i64) -> u32 {
    let moved = (addr as i64).saturating_add(delta);
    moved.clamp(0, u32::MAX as i64) as u32
}

/// The address right after `addr`, or `None` past 255.255.255.255.
pub fn checked_next(addr: u32) -> Option<u32> {
    addr.checked_add(1)
}

/// Parse a dotted quad with four octets in [0,255].
pub fn parse_address(text: &str) -> Result<Ipv4Addr, CidrError> {
    Ipv4Addr::from_str(text.trim()).map_err(|_| CidrError::InvalidFormat(text.to_string()))
}

/// Split `a.b.c.d/len` into its address and prefix length.
///
/// The prefix must be plain decimal digits in [0,32].
pub fn split_cidr(text: &str) -> Result<(Ipv4Addr, u8), CidrError> {
    let invalid = || CidrError::InvalidFormat(text.to_string());

    let (addr, len) = text.trim().split_once('/').ok_or_else(invalid)?;
    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let addr = Ipv4Addr::from_str(addr).map_err(|_| invalid())?;
    let len = u8::from_str(len).map_err(|_| invalid())?;
    if len > MAX_LENGTH {
        return Err(invalid());
    }
    Ok((addr, len))
}
