use crate::errors::{ReconError, Result};
use crate::radix::{MAX_BASE, MIN_BASE};
use crate::task::{Point, Task};
use rug::{rand::RandState, Integer};
use std::cmp::Ordering;

pub const COEFF_BITS: u32 = 64;

/// `[secret, c_1, .., c_{k-1}]` with each `c_i` uniform in `[0, bound)`.
pub fn gen_coefficients(
    secret: &Integer,
    k: usize,
    bound: &Integer,
    r: &mut RandState,
) -> Vec<Integer> {
    let mut coeffs = Vec::with_capacity(k);
    coeffs.push(secret.clone());
    for _ in 1..k {
        coeffs.push(Integer::from(bound.random_below_ref(r)));
    }
    coeffs
}

/// Horner evaluation; `coeffs[0]` is the constant term.
pub fn eval_poly(coeffs: &[Integer], x: &Integer) -> Integer {
    let mut acc = Integer::new();
    for c in coeffs.iter().rev() {
        acc *= x;
        acc += c;
    }
    acc
}

/// Splits a non-negative `secret` into `n` points on a random polynomial of
/// degree `k - 1`, at x = 1..=n, each y written in a random base.
pub fn gen_shares(
    secret: &Integer,
    k: usize,
    n: usize,
    r: &mut RandState,
) -> Result<Task> {
    if secret.cmp0() == Ordering::Less {
        return Err(ReconError::NegativeSecret);
    }
    if k == 0 || k > n {
        return Err(ReconError::InvalidThreshold { k, n });
    }
    let bound = Integer::from(Integer::u_pow_u(2, COEFF_BITS));
    let coeffs = gen_coefficients(secret, k, &bound, r);
    let mut points = Vec::with_capacity(n);
    for i in 1..=n {
        let x = Integer::from(i);
        let y = eval_poly(&coeffs, &x);
        let base = MIN_BASE + r.below(MAX_BASE - MIN_BASE + 1);
        points.push(Point::encode(x, y, base)?);
    }
    Task::new(n, k, points)
}
