//! Subnet processing logic.
//!
//! - [`enumerate`] - splitting a block into equal-sized children
//! - [`membership`] - address-in-block tests

mod enumerate;
mod membership;

// Re-export public functions
pub use enumerate::{enumerate, enumerate_all, subnets, Subnets, ENUMERATE_ALL_LIMIT};
pub use membership::{contains, matching_cidrs};
