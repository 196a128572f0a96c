//! Terminal output utilities.
//!
//! Plain-text renderings of blocks, subnet sets and membership results. Every
//! printer writes to a caller-supplied [`Write`] so output can go to stdout or a
//! file.

use crate::models::{Block, SubnetSet};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Width of the label column in [`print_network`].
const LABEL_WIDTH: usize = 11;

/// Format a value as a left-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

fn write_row<W: Write + ?Sized>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "{} {value}", format_field(label, LABEL_WIDTH))
}

/// Print the details of a single block, one labelled line per field.
pub fn print_network<W: Write + ?Sized>(block: &Block, out: &mut W) -> io::Result<()> {
    write_row(out, "Network:", block.network)?;
    write_row(out, "First:", block.first)?;
    write_row(out, "Last:", block.last)?;
    write_row(out, "Broadcast:", block.broadcast)?;
    write_row(out, "Netmask:", block.mask)?;
    write_row(out, "Usable:", block.usable)?;
    match block.next {
        Some(next) => write_row(out, "Next:", next),
        None => write_row(out, "Next:", "none"),
    }
}

/// Print every member of a set as `network/prefix`, one per line.
pub fn print_subnets<W: Write + ?Sized>(set: &SubnetSet, out: &mut W) -> io::Result<()> {
    for block in &set.subnets {
        writeln!(out, "{block}")?;
    }
    Ok(())
}

/// Print several sets, each under a `/<prefix>:` header, separated by blank lines.
pub fn print_all_subnets<W: Write + ?Sized>(sets: &[SubnetSet], out: &mut W) -> io::Result<()> {
    for (idx, set) in sets.iter().enumerate() {
        writeln!(out, "/{}:", set.prefix_len)?;
        print_subnets(set, out)?;
        if idx != sets.len() - 1 {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print the result of a membership check.
///
/// No match prints a cross. A single match prints a tick, or the matching CIDR
/// when the candidates came from a file. Several matches are listed one per line.
pub fn print_matches<W: Write + ?Sized>(
    matches: &[String],
    from_file: bool,
    out: &mut W,
) -> io::Result<()> {
    match matches {
        [] => writeln!(out, "{}", "\u{2716}".red()),
        [only] if from_file => writeln!(out, "{only}"),
        [_] => writeln!(out, "{}", "\u{2714}".green()),
        many => {
            for cidr in many {
                writeln!(out, "{cidr}")?;
            }
            Ok(())
        }
    }
}
