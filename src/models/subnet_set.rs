//! Equal-sized child blocks produced by subnetting.

use super::Block;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Ordered child blocks sharing one prefix length, with running totals.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetSet {
    /// Prefix length shared by every member.
    pub prefix_len: u8,
    /// Number of member blocks.
    pub count: usize,
    /// Sum of the members' usable host counts.
    pub total_usable: u64,
    /// Member blocks in address order.
    pub subnets: Vec<Block>,
}

impl SubnetSet {
    /// Create an empty set for blocks of `prefix_len`.
    pub fn new(prefix_len: u8) -> SubnetSet {
        SubnetSet {
            prefix_len,
            ..Default::default()
        }
    }

    /// Append a block and update the totals.
    pub fn push(&mut self, block: Block) {
        debug_assert_eq!(block.prefix_len, self.prefix_len);
        self.total_usable += block.usable;
        self.subnets.push(block);
        self.count = self.subnets.len();
    }

    /// Network addresses of every member, in order.
    pub fn networks(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.subnets.iter().map(|b| b.network)
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }
}

impl Extend<Block> for SubnetSet {
    fn extend<T: IntoIterator<Item = Block>>(&mut self, iter: T) {
        for block in iter {
            self.push(block);
        }
    }
}
