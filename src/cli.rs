//! Command line arguments.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cider")]
#[command(version, about = "IPv4 CIDR calculator", long_about = None)]
pub struct Cli {
    /// Print all subnets that can fit within CIDR
    #[arg(short = 'a')]
    pub all: bool,

    /// Read CIDR blocks from this file
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Check whether IP is a part of CIDR
    #[arg(short = 'i', value_name = "IP")]
    pub ip: Option<String>,

    /// Print all subnets of this block size that can fit within CIDR
    #[arg(short = 's', value_name = "SIZE", value_parser = clap::value_parser!(u8).range(0..=32))]
    pub size: Option<u8>,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Block in CIDR notation, e.g. 192.168.1.0/24
    pub cidr: Option<String>,
}

/// Where membership candidates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrSource {
    Single(String),
    File(PathBuf),
}

/// The operation selected by the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Details(String),
    AllSubnets(String),
    Subnets(String, u8),
    Membership { ip: String, source: CidrSource },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve the flags into one [`Mode`].
    ///
    /// `-a` wins over `-s`, which wins over `-i`; `-s` only applies to sizes above 1.
    pub fn mode(&self) -> Result<Mode, Box<dyn Error>> {
        if let (Some(ip), Some(file)) = (&self.ip, &self.file) {
            if !self.all && !matches!(self.size, Some(s) if s > 1) {
                return Ok(Mode::Membership {
                    ip: ip.clone(),
                    source: CidrSource::File(file.clone()),
                });
            }
        }

        let cidr = self
            .cidr
            .clone()
            .ok_or("missing CIDR argument (see --help)")?;

        let mode = match (self.all, self.size, &self.ip) {
            (true, _, _) => Mode::AllSubnets(cidr),
            (false, Some(size), _) if size > 1 => Mode::Subnets(cidr, size),
            (false, _, Some(ip)) => Mode::Membership {
                ip: ip.clone(),
                source: CidrSource::Single(cidr),
            },
            _ => Mode::Details(cidr),
        };
        Ok(mode)
    }
}
