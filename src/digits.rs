use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bbp::hex_digit_with;
use crate::config::BbpParams;
use crate::{Error, Result};

/// Beyond this position results are not trusted at all.
pub const UNRELIABLE_ABOVE: i64 = 1_000_000_000_000;

/// How far a digit run can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Every term exact and the tail evaluated
    Full,
    /// Exponent reduction and series truncation in play
    Reduced,
    Unreliable,
}

fn last_position(position: i64, count: usize) -> Result<i64> {
    if position < 0 {
        return Err(Error::InvalidArgument(format!(
            "position must be non-negative, got {}",
            position
        )));
    }
    i64::try_from(count)
        .ok()
        .and_then(|count| position.checked_add(count.saturating_sub(1)))
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{} digits starting at {} run past the largest position",
                count, position
            ))
        })
}

pub fn precision(position: i64, count: usize, params: &BbpParams) -> Result<Precision> {
    let last = last_position(position, count)?;
    Ok(if last < params.direct_limit {
        Precision::Full
    } else if last <= UNRELIABLE_ABOVE {
        Precision::Reduced
    } else {
        Precision::Unreliable
    })
}

/// `count` hex digits of π starting at `position`, one position at a time.
pub fn hex_digits(position: i64, count: usize, params: &BbpParams) -> Result<String> {
    let last = last_position(position, count)?;
    if count == 0 {
        return Ok(String::new());
    }
    tracing::debug!("Computing {} digits from position {}", count, position);
    (position..=last)
        .map(|d| hex_digit_with(d, params))
        .collect()
}

/// Same output as [`hex_digits`], with positions spread over the rayon pool.
pub fn hex_digits_parallel(position: i64, count: usize, params: &BbpParams) -> Result<String> {
    let last = last_position(position, count)?;
    if count == 0 {
        return Ok(String::new());
    }
    tracing::debug!(
        "Computing {} digits from position {} on {} threads",
        count,
        position,
        rayon::current_num_threads()
    );
    (position..=last)
        .into_par_iter()
        .map(|d| hex_digit_with(d, params))
        .collect()
}
