use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "piHex")]
#[command(author, version, about = "Hexadecimal digits of pi at any position")]
pub struct Cli {
    /// Digit position (0-based, after the point). Prompted for when omitted
    #[arg(allow_negative_numbers = true)]
    pub position: Option<String>,

    /// Number of digits to print
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// YAML configuration file
    #[arg(short, long, env = "PIHEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Compute positions in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Skip the confirmation for very large positions
    #[arg(long, short)]
    pub yes: bool,

    /// Write a YAML report of the run
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn parse_position(raw: &str) -> pihex::Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(position) if position >= 0 => Ok(position),
        _ => Err(pihex::Error::InvalidArgument(format!(
            "Invalid input '{}'. Please enter a non-negative integer.",
            raw.trim()
        ))),
    }
}
