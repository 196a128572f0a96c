//! Canonical CIDR block.

use super::ipv4::{
    broadcast_of, checked_next, derive_mask, network_of, offset, split_cidr, usable_count,
    MAX_LENGTH,
};
use crate::error::CidrError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A CIDR block with every boundary address derived.
///
/// Built once from an address and prefix length; host bits of the input address
/// are cleared, so `10.1.2.3/24` and `10.1.2.0/24` give the same block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Block {
    /// Base address, host bits cleared.
    pub network: Ipv4Addr,
    /// Number of fixed network bits (0-32).
    pub prefix_len: u8,
    /// `prefix_len` leading one bits.
    pub mask: Ipv4Addr,
    /// Network with every host bit set.
    pub broadcast: Ipv4Addr,
    /// `network + 1`, saturating.
    pub first: Ipv4Addr,
    /// `broadcast - 1`, saturating.
    pub last: Ipv4Addr,
    /// Usable host addresses, 0 for /31 and /32.
    pub usable: u64,
    /// First address past the block, `None` when the block ends at 255.255.255.255.
    pub next: Option<Ipv4Addr>,
}

impl Block {
    /// Build a block from any address inside it and a prefix length.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Block, CidrError> {
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::InvalidFormat(format!("{addr}/{prefix_len}")));
        }
        Ok(Block::from_bits(u32::from(addr), prefix_len))
    }

    /// Parse a CIDR string such as `"192.168.1.0/28"`.
    pub fn parse(cidr: &str) -> Result<Block, CidrError> {
        let (addr, prefix_len) = split_cidr(cidr)?;
        Ok(Block::from_bits(u32::from(addr), prefix_len))
    }

    // prefix_len must already be validated
    pub(crate) fn from_bits(addr: u32, prefix_len: u8) -> Block {
        let mask = derive_mask(prefix_len);
        let network = network_of(addr, mask);
        let broadcast = broadcast_of(network, mask);
        Block {
            network: Ipv4Addr::from(network),
            prefix_len,
            mask: Ipv4Addr::from(mask),
            broadcast: Ipv4Addr::from(broadcast),
            first: Ipv4Addr::from(offset(network, 1)),
            last: Ipv4Addr::from(offset(broadcast, -1)),
            usable: usable_count(mask),
            next: checked_next(broadcast).map(Ipv4Addr::from),
        }
    }

    /// Number of addresses in the block, including network and broadcast.
    pub fn size(&self) -> u64 {
        super::ipv4::block_size(self.prefix_len)
    }
}

/// Parse a CIDR string into a validated [`Block`].
pub fn parse_cidr(cidr: &str) -> Result<Block, CidrError> {
    Block::parse(cidr)
}

impl FromStr for Block {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Block::parse(s)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}
