use crate::errors::{ReconError, Result};
use crate::rational::Rational;
use crate::task::Point;
use rug::Integer;
use tracing::{debug, error};

/// Evaluates the `j`-th Lagrange basis polynomial over `xs` at `r`:
/// `prod_{m != j} (r - xs[m]) / (xs[j] - xs[m])`.
///
/// Fails with [`ReconError::DivisionByZero`] if `xs[j]` appears again in `xs`.
pub fn eval_lagrange_basis(
    xs: &[Integer],
    r: &Integer,
    j: usize,
) -> Result<Rational> {
    let mut n = Integer::from(1);
    let mut d = Integer::from(1);
    for (m, x) in xs.iter().enumerate() {
        if m != j {
            n *= Integer::from(r - x);
            d *= Integer::from(&xs[j] - x);
        }
    }
    Rational::new(n, d)
}

/// Value at `r` of the unique polynomial of degree `< points.len()` through
/// `points`, summed in index order.
pub fn interpolate_at(points: &[Point], r: &Integer) -> Result<Rational> {
    let xs: Vec<Integer> = points.iter().map(|p| p.x.clone()).collect();
    let mut acc = Rational::zero();
    for (j, p) in points.iter().enumerate() {
        let basis = eval_lagrange_basis(&xs, r, j)?;
        debug!("L_{}({}) = {}", j, r, basis);
        let term = Rational::from(p.y.clone()).mul(&basis);
        acc = acc.add(&term);
    }
    Ok(acc)
}

/// The `k` points with the smallest x-coordinates, in ascending order.
pub fn select_points(points: &[Point], k: usize) -> Result<Vec<Point>> {
    if k == 0 {
        return Err(ReconError::InvalidThreshold { k, n: points.len() });
    }
    if points.len() < k {
        return Err(ReconError::InsufficientPoints { k, available: points.len() });
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x));
    sorted.truncate(k);
    Ok(sorted)
}

/// Recovers the constant term of the polynomial of degree `< k` through the
/// `k` smallest-x points.
///
/// Distinct x-coordinates are the caller's obligation; a repeated x among the
/// selected points fails with [`ReconError::DivisionByZero`]. Fails with
/// [`ReconError::NonIntegerResult`] if the interpolated value at zero is not
/// an integer.
pub fn reconstruct_secret(points: &[Point], k: usize) -> Result<Integer> {
    let selected = select_points(points, k)?;
    debug!("selected x = {:?}",
           selected.iter().map(|p| p.x.to_string()).collect::<Vec<_>>());
    let secret = interpolate_at(&selected, &Integer::new())?;
    secret.into_integer().map_err(|e| {
        error!("reconstruction failed, {} at x = 0 for k = {}", e, k);
        e
    })
}
