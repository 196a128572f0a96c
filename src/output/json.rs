//! JSON output for blocks, subnet sets and membership results.

use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// Membership result as emitted by `--json`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// The address that was looked up.
    pub address: String,
    /// True when at least one CIDR contains the address.
    pub member: bool,
    /// Every CIDR containing the address, sorted.
    pub matches: Vec<String>,
}

impl MatchReport {
    pub fn new(address: &str, matches: Vec<String>) -> MatchReport {
        MatchReport {
            address: address.to_string(),
            member: !matches.is_empty(),
            matches,
        }
    }
}

/// Render any result as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Write a result as pretty-printed JSON followed by a newline.
pub fn write_json<T, W>(value: &T, out: &mut W) -> Result<(), Box<dyn Error>>
where
    T: Serialize + ?Sized,
    W: Write + ?Sized,
{
    let json = to_json(value).map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out, "{json}")?;
    Ok(())
}
