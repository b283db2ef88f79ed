use crate::errors::{ReconError, Result};
use rug::Integer;
use tracing::error;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Parses a radix given as text, e.g. the `"base"` field of a point record.
pub fn parse_base(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(base) => check_base(base),
        Err(_) => Err(ReconError::InvalidBase(raw.to_string())),
    }
}

pub fn check_base(base: u32) -> Result<u32> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(ReconError::InvalidBase(base.to_string()))
    }
}

fn digit_value(c: char) -> Option<u32> {
    match c.to_ascii_lowercase() {
        d @ '0'..='9' => Some(d as u32 - '0' as u32),
        d @ 'a'..='z' => Some(d as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// Decodes a case-insensitive digit string in `base` into a non-negative
/// integer, most significant digit first. The empty string decodes to zero.
pub fn decode(digits: &str, base: u32) -> Result<Integer> {
    let base = check_base(base)?;
    let mut acc = Integer::new();
    for (position, c) in digits.chars().enumerate() {
        let d = match digit_value(c) {
            Some(d) if d < base => d,
            _ => {
                error!("decode failed, {:?} is not a base {} digit", c, base);
                return Err(ReconError::InvalidDigit { digit: c, position, base });
            }
        };
        acc *= base;
        acc += d;
    }
    Ok(acc)
}

/// Canonical lowercase digit string of a non-negative `value` in `base`.
pub fn encode(value: &Integer, base: u32) -> Result<String> {
    let base = check_base(base)?;
    if value.cmp0() == std::cmp::Ordering::Less {
        return Err(ReconError::NegativeSecret);
    }
    Ok(value.to_string_radix(base as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rug::{rand::RandState, Integer};

    #[test]
    fn decode_fixture_values() {
        assert_eq!(decode("4", 10).unwrap(), 4);
        assert_eq!(decode("111", 2).unwrap(), 7);
        assert_eq!(decode("213", 4).unwrap(), 39);
        assert_eq!(decode("a3c97ed550c69484", 15).unwrap(),
                   Integer::from(4491108874584447649u64));
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("FF", 16).unwrap(), 255);
        assert_eq!(decode("fF", 16).unwrap(), 255);
        assert_eq!(decode("Zz", 36).unwrap(), 35 * 36 + 35);
    }

    #[test]
    fn decode_beyond_u64() {
        let v = decode("30140555423010311322515333", 6).unwrap();
        assert_eq!(v, "86628991292533394985".parse::<Integer>().unwrap());
        assert!(v > u64::MAX);
    }

    #[test]
    fn decode_empty_is_zero() {
        assert_eq!(decode("", 10).unwrap(), 0);
    }

    #[test]
    fn decode_rejects_bad_digits() {
        match decode("1012", 2) {
            Err(ReconError::InvalidDigit { digit, position, base }) => {
                assert_eq!(digit, '2');
                assert_eq!(position, 3);
                assert_eq!(base, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(decode("12-3", 10), Err(ReconError::InvalidDigit { .. })));
        assert!(matches!(decode("0x10", 16), Err(ReconError::InvalidDigit { .. })));
        assert!(matches!(decode("1.5", 10), Err(ReconError::InvalidDigit { .. })));
        assert!(matches!(decode("{", 36), Err(ReconError::InvalidDigit { .. })));
        assert!(matches!(decode("é", 36), Err(ReconError::InvalidDigit { .. })));
    }

    #[test]
    fn base_bounds() {
        assert!(matches!(decode("1", 1), Err(ReconError::InvalidBase(_))));
        assert!(matches!(decode("1", 37), Err(ReconError::InvalidBase(_))));
        assert_eq!(parse_base("16").unwrap(), 16);
        assert_eq!(parse_base(" 2 ").unwrap(), 2);
        assert!(matches!(parse_base("ten"), Err(ReconError::InvalidBase(_))));
        assert!(matches!(parse_base("-2"), Err(ReconError::InvalidBase(_))));
        assert!(matches!(parse_base("0"), Err(ReconError::InvalidBase(_))));
    }

    #[test]
    fn radix_round_trip() {
        let mut rand = RandState::new();
        let mut rng = rand::thread_rng();
        let seed: u64 = rng.gen();
        rand.seed(&Integer::from(seed));
        let bound = Integer::from(Integer::u_pow_u(2, 200));
        for base in MIN_BASE..=MAX_BASE {
            for _ in 0..8 {
                let v = Integer::from(bound.random_below_ref(&mut rand));
                let digits = encode(&v, base).unwrap();
                assert_eq!(decode(&digits, base).unwrap(), v);
                assert_eq!(decode(&digits.to_uppercase(), base).unwrap(), v);
            }
            assert_eq!(encode(&Integer::new(), base).unwrap(), "0");
            assert_eq!(decode("0", base).unwrap(), 0);
        }
    }

    #[test]
    fn encode_rejects_negative() {
        assert!(matches!(encode(&Integer::from(-1), 10),
                         Err(ReconError::NegativeSecret)));
    }
}
