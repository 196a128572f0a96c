//! Address membership tests.

use crate::error::CidrError;
use crate::models::{parse_address, Block};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// True when `addr` falls inside `block`.
///
/// The address is widened to a block of the same prefix length, which clears its
/// host bits, and the two networks are compared.
pub fn contains(block: &Block, addr: Ipv4Addr) -> bool {
    let candidate = Block::from_bits(u32::from(addr), block.prefix_len);
    candidate.network == block.network
}

/// Every CIDR in `cidrs` that contains `address`, sorted.
///
/// Stops at the first CIDR that fails to parse.
pub fn matching_cidrs<S: AsRef<str>>(address: &str, cidrs: &[S]) -> Result<Vec<String>, CidrError> {
    let addr = parse_address(address)?;
    let mut matches = Vec::new();
    for cidr in cidrs {
        let cidr = cidr.as_ref();
        if contains(&Block::parse(cidr)?, addr) {
            matches.push(cidr.trim().to_string());
        }
    }
    log::trace!("matching_cidrs({address}) {} of {}", matches.len(), cidrs.len());
    Ok(matches.into_iter().sorted().collect())
}
