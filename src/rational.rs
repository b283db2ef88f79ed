use crate::errors::{ReconError, Result};
use crate::utils::{abs, gcd};
use rug::Integer;
use std::{cmp::Ordering,
          fmt,
          ops::{Add, Mul},
};

/// An exact fraction over arbitrary-precision integers.
///
/// Always kept in lowest terms with a strictly positive denominator, so the
/// representation of a value is unique and structural equality is value
/// equality. Zero is `0/1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    numer: Integer,
    denom: Integer,
}

impl Rational {
    /// Builds `numer / denom` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`ReconError::DivisionByZero`] if `denom` is zero.
    pub fn new(numer: Integer, denom: Integer) -> Result<Self> {
        if denom.cmp0() == Ordering::Equal {
            return Err(ReconError::DivisionByZero);
        }
        Ok(Self::normalized(numer, denom))
    }

    // Callers guarantee a non-zero denominator.
    fn normalized(mut numer: Integer, mut denom: Integer) -> Self {
        debug_assert!(denom.cmp0() != Ordering::Equal);
        if denom.cmp0() == Ordering::Less {
            numer = -numer;
            denom = -denom;
        }
        let g = gcd(&abs(&numer), &denom);
        if g != 1 {
            numer.div_exact_mut(&g);
            denom.div_exact_mut(&g);
        }
        Rational { numer, denom }
    }

    pub fn zero() -> Self {
        Rational { numer: Integer::new(), denom: Integer::from(1) }
    }

    pub fn one() -> Self {
        Rational { numer: Integer::from(1), denom: Integer::from(1) }
    }

    pub fn numer(&self) -> &Integer {
        &self.numer
    }

    pub fn denom(&self) -> &Integer {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Exact sum. The common denominator is reduced through
    /// `gcd(p.denom, q.denom)` before cross-multiplying.
    pub fn add(&self, other: &Rational) -> Rational {
        let g = gcd(&self.denom, &other.denom);
        let lhs_scale = Integer::from(&other.denom / &g);
        let rhs_scale = Integer::from(&self.denom / &g);
        let denom = Integer::from(&self.denom * &lhs_scale);
        let numer = Integer::from(&self.numer * &lhs_scale)
            + Integer::from(&other.numer * &rhs_scale);
        Self::normalized(numer, denom)
    }

    /// Exact product.
    pub fn mul(&self, other: &Rational) -> Rational {
        let numer = Integer::from(&self.numer * &other.numer);
        let denom = Integer::from(&self.denom * &other.denom);
        Self::normalized(numer, denom)
    }

    /// Reduces to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ReconError::NonIntegerResult`] when the denominator does not
    /// divide the numerator.
    pub fn into_integer(self) -> Result<Integer> {
        if self.denom == 1 {
            return Ok(self.numer);
        }
        if self.numer.is_divisible(&self.denom) {
            let mut q = self.numer;
            q.div_exact_mut(&self.denom);
            return Ok(q);
        }
        Err(ReconError::NonIntegerResult(self.to_string()))
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Rational { numer: n, denom: Integer::from(1) }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from(Integer::from(n))
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn add(self, rhs: &'a Rational) -> Rational {
        Rational::add(self, rhs)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;
    fn mul(self, rhs: &'a Rational) -> Rational {
        Rational::mul(self, rhs)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
