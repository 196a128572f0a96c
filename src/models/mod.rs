//! Core data model for CIDR arithmetic.
//!
//! - [`ipv4`] - pure address and mask arithmetic
//! - [`Block`] - a parsed, canonical CIDR block
//! - [`SubnetSet`] - equal-sized children of a block

mod block;
mod ipv4;
mod subnet_set;

// Re-export public types
pub use block::{parse_cidr, Block};
pub use ipv4::{
    block_size, broadcast_of, checked_next, derive_mask, network_of, offset, parse_address,
    split_cidr, usable_count, MAX_LENGTH,
};
pub use subnet_set::SubnetSet;
