//! Error types returned by the CIDR core.

use thiserror::Error;

/// Errors produced while parsing or subdividing a CIDR block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// The input is not `a.b.c.d/len` with four octets in [0,255] and a prefix in [0,32].
    #[error("invalid CIDR address: {0}")]
    InvalidFormat(String),

    /// The requested child prefix is coarser than the parent block.
    #[error("block size ({size}) must not be smaller than parent CIDR prefix ({prefix})")]
    InvalidSubnetSize { size: u8, prefix: u8 },
}
