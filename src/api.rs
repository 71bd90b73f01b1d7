//! Forward-mode driver functions over closures of dual numbers.
//!
//! These cover the common seeding patterns: one-hot seeds for gradients and
//! Jacobians, a directional seed for Jacobian-vector products. For a full
//! Jacobian in a single pass, seed with [`MultiDual`](crate::MultiDual)
//! and assemble rows via [`MultiDual::stack`](crate::MultiDual::stack).

use crate::dual::Dual;
use crate::float::Float;

/// Compute the gradient of a scalar function `f : R^n → R` by forward mode.
///
/// Runs one forward pass per input variable with a one-hot seed.
///
/// ```
/// let g = tangent::grad(|x: &[tangent::Dual<f64>]| x[0] * x[0] + x[1] * x[1], &[3.0, 4.0]);
/// assert!((g[0] - 6.0).abs() < 1e-12);
/// assert!((g[1] - 8.0).abs() < 1e-12);
/// ```
pub fn grad<F: Float>(f: impl Fn(&[Dual<F>]) -> Dual<F>, x: &[F]) -> Vec<F> {
    (0..x.len())
        .map(|j| f(&one_hot_seeds(x, j)).eps)
        .collect()
}

/// Jacobian-vector product: `(f(x), J·v)` in a single forward pass.
///
/// Seeds each input with the matching component of the direction `v`.
///
/// # Panics
///
/// Panics if `x` and `v` have different lengths.
pub fn jvp<F: Float>(f: impl Fn(&[Dual<F>]) -> Vec<Dual<F>>, x: &[F], v: &[F]) -> (Vec<F>, Vec<F>) {
    assert_eq!(x.len(), v.len(), "x and v must have the same length");
    let inputs: Vec<Dual<F>> = x
        .iter()
        .zip(v.iter())
        .map(|(&xi, &vi)| Dual::new(xi, vi))
        .collect();
    let outputs = f(&inputs);
    let values = outputs.iter().map(|d| d.re).collect();
    let tangents = outputs.iter().map(|d| d.eps).collect();
    (values, tangents)
}

/// Compute the full Jacobian of `f : R^n → R^m` by forward mode.
///
/// Returns `(f(x), J)` where `J[i][j] = ∂f_i/∂x_j`, using one forward pass
/// per input variable; values are read off the first pass.
pub fn jacobian<F: Float>(
    f: impl Fn(&[Dual<F>]) -> Vec<Dual<F>>,
    x: &[F],
) -> (Vec<F>, Vec<Vec<F>>) {
    let n = x.len();
    let mut values = Vec::new();
    let mut columns: Vec<Vec<F>> = Vec::with_capacity(n);
    for j in 0..n {
        let outputs = f(&one_hot_seeds(x, j));
        if j == 0 {
            values = outputs.iter().map(|d| d.re).collect();
        }
        columns.push(outputs.iter().map(|d| d.eps).collect());
    }

    let m = values.len();
    let jac = (0..m)
        .map(|i| columns.iter().map(|col| col[i]).collect())
        .collect();
    (values, jac)
}

fn one_hot_seeds<F: Float>(x: &[F], j: usize) -> Vec<Dual<F>> {
    x.iter()
        .enumerate()
        .map(|(k, &xi)| {
            if k == j {
                Dual::variable(xi)
            } else {
                Dual::constant(xi)
            }
        })
        .collect()
}
