//! Output formatting for CIDR results.
//!
//! - [`terminal`] - plain text, optionally coloured
//! - [`json`] - JSON via serde

mod json;
mod terminal;

pub use json::{to_json, write_json, MatchReport};
pub use terminal::{format_field, print_all_subnets, print_matches, print_network, print_subnets};
