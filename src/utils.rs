use rug::Integer;

pub fn abs(a: &Integer) -> Integer {
    Integer::from(a.abs_ref())
}

/// Greatest common divisor of `|a|` and `|b|`. Always non-negative, and
/// `gcd(0, d) = |d|`.
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.gcd_ref(b))
}
