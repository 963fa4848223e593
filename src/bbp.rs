use crate::bigmath::mod_pow;
use crate::config::BbpParams;
use crate::{Error, Result};

pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Denominator offsets of the four BBP series.
pub const BBP_TERMS: [i64; 4] = [1, 4, 5, 6];

/// Fractional part of `sum_{k>=0} 16^(d-k) / (8k+j)`.
///
/// Exact modular exponentiation is used while `d - k` stays within
/// `direct_limit`. Past that the exponent is reduced modulo `m - 1`, which is
/// only Euler-correct for prime `m`, and indices beyond `direct_limit` are not
/// summed at all. Both lose accuracy at very large positions.
pub(crate) fn partial_sum(d: i64, j: i64, params: &BbpParams) -> f64 {
    let mut sum = 0.0;

    let k_limit = d.min(params.direct_limit);
    for k in 0..=k_limit {
        let m = 8 * k + j;
        if m == 0 {
            continue;
        }

        let exp = d - k;
        let exp = if exp <= params.direct_limit || m == 1 {
            exp
        } else {
            exp.rem_euclid(m - 1)
        };
        let term = mod_pow(16, exp as u64, m as u64) as f64 / m as f64;

        sum += term;
        sum -= sum.floor();
    }

    if d < params.direct_limit {
        // Geometric tail, holding the denominator at its k = d + 1 value
        let mut term = 0.0;
        let mut k = d + 1;
        loop {
            term /= 16.0;
            if k == d + 1 {
                term = 1.0 / (16.0 * (8 * k + j) as f64);
            }

            if term < params.tail_tolerance {
                break;
            }
            sum += term;
            if k - d > params.tail_max_terms {
                break;
            }
            k += 1;
        }
    }

    sum - sum.floor()
}

/// Hex digit of π at `position`, counted from 0 right after the point.
pub fn hex_digit(position: i64) -> Result<char> {
    hex_digit_with(position, &BbpParams::default())
}

pub fn hex_digit_with(position: i64, params: &BbpParams) -> Result<char> {
    if position < 0 {
        return Err(Error::InvalidArgument(format!(
            "position must be non-negative, got {}",
            position
        )));
    }

    let [s1, s4, s5, s6] = BBP_TERMS.map(|j| partial_sum(position, j, params));
    let mut x = 4.0 * s1 - 2.0 * s4 - s5 - s6;
    x -= x.floor();
    if x < 0.0 {
        x = 0.0;
    }

    let digit = ((x * 16.0) as i64).clamp(0, 15);
    Ok(HEX_DIGITS[digit as usize] as char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_leading_digits() {
        assert_eq!(hex_digit(0), Ok('2'));
        assert_eq!(hex_digit(1), Ok('4'));
        assert_eq!(hex_digit(2), Ok('3'));
        assert_eq!(hex_digit(3), Ok('F'));
    }

    #[test]
    fn test_negative_position() {
        assert!(matches!(hex_digit(-1), Err(Error::InvalidArgument(_))));
        assert!(matches!(hex_digit(i64::MIN), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_partial_sum_is_fractional() {
        let params = BbpParams::default();
        for d in [0, 1, 7, 100, 5_000] {
            for j in BBP_TERMS {
                let s = partial_sum(d, j, &params);
                assert!((0.0..1.0).contains(&s), "d={} j={} sum={}", d, j, s);
            }
        }
    }

    #[test]
    fn test_partial_sum_at_zero() {
        // k = 0 contributes 16^0 mod 1 = 0, so only the tail remains
        let s = partial_sum(0, 1, &BbpParams::default());
        let first_tail = 1.0 / (16.0 * 9.0);
        assert!(s > first_tail && s < first_tail * 16.0 / 15.0 + 1e-12);
    }

    #[test]
    fn test_tail_cap_stops_iteration() {
        let params = BbpParams {
            tail_tolerance: f64::MIN_POSITIVE,
            tail_max_terms: 0,
            ..BbpParams::default()
        };
        // One tail term is added before the cap is checked
        let s = partial_sum(0, 1, &params);
        assert_eq!(s, 1.0 / 144.0);
    }

    #[test]
    fn test_direct_limit_boundary() {
        assert_eq!(hex_digit(999_999), Ok('2'));
        assert_eq!(hex_digit(1_000_000), Ok('6'));
        assert_eq!(hex_digit(1_000_001), Ok('C'));
    }

    #[test]
    fn test_reduced_exponent_path() {
        // A small limit forces the m - 1 reduction even at modest positions
        let params = BbpParams {
            direct_limit: 10,
            ..BbpParams::default()
        };
        for d in [11, 50, 1_000] {
            let digit = hex_digit_with(d, &params).unwrap();
            assert!(HEX_DIGITS.contains(&(digit as u8)));
            assert_eq!(hex_digit_with(d, &params), Ok(digit));
        }
    }

    #[test]
    fn test_huge_position_terminates() {
        let params = BbpParams {
            direct_limit: 1_000,
            ..BbpParams::default()
        };
        let digit = hex_digit_with(i64::MAX, &params).unwrap();
        assert!(HEX_DIGITS.contains(&(digit as u8)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_digit_in_alphabet(d in 0i64..2_000) {
            let digit = hex_digit(d).unwrap();
            prop_assert!(HEX_DIGITS.contains(&(digit as u8)));
        }

        #[test]
        fn prop_deterministic(d in 0i64..2_000) {
            prop_assert_eq!(hex_digit(d), hex_digit(d));
        }
    }
}
