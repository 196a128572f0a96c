//! IPv4 CIDR calculator.
//!
//! Parses CIDR strings into canonical [`Block`]s, splits blocks into
//! equal-sized children and answers address membership questions. The
//! [`output`], [`input`] and [`cli`] modules hold the I/O glue used by the
//! `cider` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use cli::{CidrSource, Cli, Mode};
use std::error::Error;
use std::io::Write;

pub use error::CidrError;
pub use models::{parse_cidr, Block, SubnetSet};
pub use processing::{contains, enumerate, enumerate_all, matching_cidrs};

/// Parse a CIDR string and derive every boundary address.
///
/// # Examples
/// ```
/// let block = cider::details("192.168.1.0/28").unwrap();
/// assert_eq!(block.broadcast.to_string(), "192.168.1.15");
/// assert_eq!(block.usable, 14);
/// ```
pub fn details(cidr: &str) -> Result<Block, CidrError> {
    parse_cidr(cidr)
}

/// Every child of `cidr` with the given prefix length.
pub fn subnets_of(cidr: &str, prefix_len: u8) -> Result<SubnetSet, CidrError> {
    let parent = details(cidr)?;
    enumerate(&parent, prefix_len)
}

/// Children of `cidr` for every prefix length from one past its own up to /29.
pub fn all_subnets_of(cidr: &str) -> Result<Vec<SubnetSet>, CidrError> {
    let parent = details(cidr)?;
    enumerate_all(&parent)
}

/// True when `address` is inside `cidr`.
pub fn is_member(address: &str, cidr: &str) -> Result<bool, CidrError> {
    let block = details(cidr)?;
    let addr = models::parse_address(address)?;
    Ok(contains(&block, addr))
}

/// Run the operation selected on the command line, writing results to `out`.
pub fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mode = cli.mode()?;
    log::debug!("run({mode:?}) json={}", cli.json);

    match mode {
        Mode::Details(cidr) => {
            let block = details(&cidr)?;
            if cli.json {
                output::write_json(&block, out)?;
            } else {
                output::print_network(&block, out)?;
            }
        }
        Mode::AllSubnets(cidr) => {
            let sets = all_subnets_of(&cidr)?;
            if cli.json {
                output::write_json(&sets, out)?;
            } else {
                output::print_all_subnets(&sets, out)?;
            }
        }
        Mode::Subnets(cidr, size) => {
            let set = subnets_of(&cidr, size)?;
            if cli.json {
                output::write_json(&set, out)?;
            } else {
                output::print_subnets(&set, out)?;
            }
        }
        Mode::Membership { ip, source } => {
            let (cidrs, from_file) = match source {
                CidrSource::Single(cidr) => (vec![cidr], false),
                CidrSource::File(path) => (input::read_cidr_file(path)?, true),
            };
            let matches = matching_cidrs(&ip, &cidrs)?;
            if cli.json {
                output::write_json(&output::MatchReport::new(&ip, matches), out)?;
            } else {
                output::print_matches(&matches, from_file, out)?;
            }
        }
    }
    Ok(())
}
