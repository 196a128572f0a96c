//! Subnet enumeration.
//!
//! Walks a parent block and yields every child block of a requested prefix
//! length, in address order, until the parent's address space is used up.

use crate::error::CidrError;
use crate::models::{Block, SubnetSet, MAX_LENGTH};

/// [`enumerate_all`] stops before this prefix length; /30, /31 and /32 are never listed.
pub const ENUMERATE_ALL_LIMIT: u8 = 30;

/// Lazy walk over the children of a block.
///
/// Created by [`subnets`].
#[derive(Debug, Clone)]
pub struct Subnets {
    current: Option<Block>,
    // one past the parent's broadcast; 2^32 for blocks ending at 255.255.255.255
    end: u64,
    prefix_len: u8,
}

impl Iterator for Subnets {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let current = self.current.take()?;
        let next = u32::from(current.broadcast) as u64 + 1;
        if next < self.end {
            self.current = Some(Block::from_bits(next as u32, self.prefix_len));
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.current {
            Some(block) => {
                let remaining = (self.end - u32::from(block.network) as u64) / block.size();
                match usize::try_from(remaining) {
                    Ok(n) => (n, Some(n)),
                    Err(_) => (usize::MAX, None),
                }
            }
            None => (0, Some(0)),
        }
    }
}

/// Start a walk over every `prefix_len` child of `parent`.
pub fn subnets(parent: &Block, prefix_len: u8) -> Result<Subnets, CidrError> {
    if prefix_len > MAX_LENGTH {
        return Err(CidrError::InvalidFormat(format!(
            "{}/{prefix_len}",
            parent.network
        )));
    }
    if prefix_len < parent.prefix_len {
        return Err(CidrError::InvalidSubnetSize {
            size: prefix_len,
            prefix: parent.prefix_len,
        });
    }
    let end = u32::from(parent.broadcast) as u64 + 1;
    let first = Block::from_bits(u32::from(parent.network), prefix_len);
    Ok(Subnets {
        current: Some(first),
        end,
        prefix_len,
    })
}

/// Collect every `prefix_len` child of `parent` into a [`SubnetSet`].
///
/// # Errors
/// [`CidrError::InvalidSubnetSize`] when `prefix_len` is shorter than the parent's.
pub fn enumerate(parent: &Block, prefix_len: u8) -> Result<SubnetSet, CidrError> {
    let mut set = SubnetSet::new(prefix_len);
    set.extend(subnets(parent, prefix_len)?);
    log::trace!(
        "enumerate({parent}, /{prefix_len}) count={} total_usable={}",
        set.count,
        set.total_usable
    );
    Ok(set)
}

/// One [`SubnetSet`] per prefix length from `parent.prefix_len + 1` up to /29.
///
/// Parents of /29 or longer produce an empty list.
pub fn enumerate_all(parent: &Block) -> Result<Vec<SubnetSet>, CidrError> {
    (parent.prefix_len + 1..ENUMERATE_ALL_LIMIT)
        .map(|len| enumerate(parent, len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_cidr;
    use std::net::Ipv4Addr;

    fn networks(set: &SubnetSet) -> Vec<String> {
        set.networks().map(|ip| ip.to_string()).collect()
    }

    #[test]
    fn test_enumerate_two_children() {
        let parent = parse_cidr("192.168.1.0/27").unwrap();
        let set = enumerate(&parent, 28).unwrap();
        assert_eq!(networks(&set), vec!["192.168.1.0", "192.168.1.16"]);
        assert_eq!(set.count, 2);
        assert_eq!(set.prefix_len, 28);
        assert_eq!(set.total_usable, 28);
    }

    #[test]
    fn test_enumerate_rejects_larger_block() {
        let parent = parse_cidr("192.168.1.0/27").unwrap();
        assert_eq!(
            enumerate(&parent, 26).unwrap_err(),
            CidrError::InvalidSubnetSize {
                size: 26,
                prefix: 27
            }
        );
        assert!(matches!(
            enumerate(&parent, 33),
            Err(CidrError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_enumerate_same_size_is_parent() {
        for cidr in ["10.0.0.0/8", "192.168.1.64/26", "1.2.3.4/32", "0.0.0.0/0"] {
            let parent = parse_cidr(cidr).unwrap();
            let set = enumerate(&parent, parent.prefix_len).unwrap();
            assert_eq!(set.subnets, vec![parent], "{cidr}");
        }
    }

    #[test]
    fn test_enumerate_counts_and_totals() {
        let parent = parse_cidr("10.20.0.0/20").unwrap();
        for len in 20..=32u8 {
            let set = enumerate(&parent, len).unwrap();
            assert_eq!(set.count, 1usize << (len - 20), "/{len}");
            if len < 31 {
                assert_eq!(
                    set.total_usable,
                    parent.size() - 2 * set.count as u64,
                    "/{len}"
                );
            }
            let last = set.subnets.last().unwrap();
            assert_eq!(last.broadcast, parent.broadcast, "/{len}");
        }
    }

    #[test]
    fn test_enumerate_top_of_address_space() {
        let parent = parse_cidr("255.255.255.0/24").unwrap();
        let set = enumerate(&parent, 26).unwrap();
        assert_eq!(
            networks(&set),
            vec![
                "255.255.255.0",
                "255.255.255.64",
                "255.255.255.128",
                "255.255.255.192"
            ]
        );
        assert_eq!(set.subnets[3].next, None);

        let whole = parse_cidr("0.0.0.0/0").unwrap();
        let halves = enumerate(&whole, 1).unwrap();
        assert_eq!(networks(&halves), vec!["0.0.0.0", "128.0.0.0"]);
    }

    #[test]
    fn test_subnets_is_lazy() {
        let whole = parse_cidr("0.0.0.0/0").unwrap();
        let mut walk = subnets(&whole, 32).unwrap();
        assert_eq!(walk.next().unwrap().network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(walk.next().unwrap().network, Ipv4Addr::new(0, 0, 0, 1));

        let parent = parse_cidr("10.0.0.0/24").unwrap();
        let walk = subnets(&parent, 28).unwrap();
        assert_eq!(walk.size_hint(), (16, Some(16)));
        assert_eq!(walk.count(), 16);
    }

    #[test]
    fn test_enumerate_all() {
        let parent = parse_cidr("192.168.1.0/27").unwrap();
        let sets = enumerate_all(&parent).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].prefix_len, 28);
        assert_eq!(networks(&sets[0]), vec!["192.168.1.0", "192.168.1.16"]);
        assert_eq!(sets[1].prefix_len, 29);
        assert_eq!(
            networks(&sets[1]),
            vec![
                "192.168.1.0",
                "192.168.1.8",
                "192.168.1.16",
                "192.168.1.24"
            ]
        );
    }

    #[test]
    fn test_enumerate_all_stops_before_30() {
        let parent = parse_cidr("10.0.0.0/24").unwrap();
        let prefixes: Vec<u8> = enumerate_all(&parent)
            .unwrap()
            .iter()
            .map(|s| s.prefix_len)
            .collect();
        assert_eq!(prefixes, vec![25, 26, 27, 28, 29]);

        for cidr in ["10.0.0.0/29", "10.0.0.0/30", "10.0.0.0/32"] {
            let parent = parse_cidr(cidr).unwrap();
            assert!(enumerate_all(&parent).unwrap().is_empty(), "{cidr}");
        }
    }
}
