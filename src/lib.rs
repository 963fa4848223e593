//! # piHex
//!
//! Hexadecimal digits of π at arbitrary positions via the Bailey–Borwein–Plouffe
//! formula, without computing the digits before them.
//!
//! ```rust
//! use pihex::{hex_digit, hex_digits, BbpParams};
//!
//! # fn main() -> pihex::Result<()> {
//! assert_eq!(hex_digit(0)?, '2');
//! let run = hex_digits(0, 8, &BbpParams::default())?;
//! assert_eq!(run, "243F6A88");
//! # Ok(())
//! # }
//! ```
//!
//! Arithmetic is plain `f64`. Past roughly a million digits the series is
//! truncated and exponents are reduced approximately, so accuracy degrades;
//! [`precision`] reports how far a request can be trusted.

pub mod bbp;
pub mod bigmath;
pub mod config;
pub mod digits;
pub mod error;
pub mod report;

pub use bbp::{hex_digit, hex_digit_with};
pub use bigmath::mod_pow;
pub use config::{BbpParams, Config};
pub use digits::{hex_digits, hex_digits_parallel, precision, Precision};
pub use error::{Error, Result};
pub use report::RunReport;
