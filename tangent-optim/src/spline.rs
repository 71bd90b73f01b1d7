//! Quadratic-spline interpolation over ordered sample points.
//!
//! Each adjacent pair of samples gets its own quadratic piece
//! `a·x² + b·x + c`. The fit assembles a `3n×3n` linear system whose
//! coefficients are value/derivative evaluations of the basis pieces via
//! dual numbers: interpolation rows pin each piece to its endpoints, the
//! dual tangents supply the slope-matching rows at interior knots, and a
//! final row closes the system by making the first piece linear (`a₁ = 0`).

use tangent::{Dual, Float};

use crate::linalg::{solve, DenseMatrix};
use crate::result::SolveError;

/// A fitted piecewise-quadratic interpolant.
#[derive(Debug, Clone)]
pub struct QuadraticSpline<F> {
    knots: Vec<F>,
    coeffs: Vec<F>,
}

impl<F: Float> QuadraticSpline<F> {
    /// Fit a quadratic spline through `(xs[i], ys[i])` sample pairs.
    ///
    /// `xs` must be in increasing order. Requires equal lengths and at least
    /// three points; the assembled system failing to solve is
    /// [`SolveError::SingularSystem`].
    pub fn fit(xs: &[F], ys: &[F]) -> Result<Self, SolveError> {
        if xs.len() != ys.len() {
            return Err(SolveError::SampleMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 3 {
            return Err(SolveError::TooFewSamples { count: xs.len() });
        }

        let n = xs.len() - 1;
        let dim = 3 * n;
        let mut a = DenseMatrix::zeros(dim);
        let mut rhs = vec![F::zero(); dim];

        // Basis pieces per segment, evaluated as duals so each row can read
        // off either the value or the slope.
        let quad = |v: F| Dual::variable(v).powi(2);
        let lin = Dual::<F>::variable;
        let one = Dual::constant(F::one());

        for i in 0..n {
            // Interpolation rows: the piece passes through both endpoints.
            a.set(3 * i, 3 * i, quad(xs[i]).re);
            a.set(3 * i, 3 * i + 1, lin(xs[i]).re);
            a.set(3 * i, 3 * i + 2, one.re);
            rhs[3 * i] = ys[i];

            a.set(3 * i + 1, 3 * i, quad(xs[i + 1]).re);
            a.set(3 * i + 1, 3 * i + 1, lin(xs[i + 1]).re);
            a.set(3 * i + 1, 3 * i + 2, one.re);
            rhs[3 * i + 1] = ys[i + 1];

            // Slope-matching row at the interior knot: this piece's
            // derivative minus the next piece's derivative is zero.
            if i != n - 1 {
                a.set(3 * i + 2, 3 * i, quad(xs[i + 1]).eps);
                a.set(3 * i + 2, 3 * i + 1, lin(xs[i + 1]).eps);
                a.set(3 * i + 2, 3 * i + 2, one.eps);
                a.set(3 * i + 2, 3 * (i + 1), -quad(xs[i + 1]).eps);
                a.set(3 * i + 2, 3 * (i + 1) + 1, -lin(xs[i + 1]).eps);
                a.set(3 * i + 2, 3 * (i + 1) + 2, -one.eps);
            }
        }

        // Closure row: the first piece is linear.
        a.set(dim - 1, 0, F::one());

        let coeffs = solve(&a, &rhs).ok_or(SolveError::SingularSystem)?;
        Ok(QuadraticSpline {
            knots: xs.to_vec(),
            coeffs,
        })
    }

    /// The `3n` coefficients in `[a₁, b₁, c₁, …, aₙ, bₙ, cₙ]` order.
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Number of quadratic pieces.
    pub fn segments(&self) -> usize {
        self.knots.len() - 1
    }

    /// The `(a, b, c)` coefficients of piece `i`.
    pub fn segment(&self, i: usize) -> (F, F, F) {
        (
            self.coeffs[3 * i],
            self.coeffs[3 * i + 1],
            self.coeffs[3 * i + 2],
        )
    }

    /// Evaluate the interpolant at `x`.
    ///
    /// Outside the knot range the nearest boundary piece extrapolates.
    pub fn eval(&self, x: F) -> F {
        let last = self.segments() - 1;
        let mut i = 0;
        while i < last && x >= self.knots[i + 1] {
            i += 1;
        }
        let (a, b, c) = self.segment(i);
        (a * x + b) * x + c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_known_two_segment_system() {
        // Points (0,0), (1,1), (2,4) with a linear first piece give
        // S1 = x and S2 = 2x² - 3x + 2.
        let spline = QuadraticSpline::<f64>::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let expected = [0.0, 1.0, 0.0, 2.0, -3.0, 2.0];
        for (got, want) in spline.coeffs().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "coeffs = {:?}", spline.coeffs());
        }
    }

    #[test]
    fn straight_line_stays_linear() {
        let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        let spline = QuadraticSpline::fit(&xs, &ys).unwrap();
        for i in 0..spline.segments() {
            let (a, b, c) = spline.segment(i);
            assert!(a.abs() < 1e-9);
            assert!((b - 2.0).abs() < 1e-9);
            assert!((c - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn value_and_slope_match_at_interior_knots() {
        let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
        let ys: [f64; 4] = [0.0, 2.0, 1.0, 3.0];
        let spline = QuadraticSpline::fit(&xs, &ys).unwrap();
        for i in 0..spline.segments() - 1 {
            let knot = xs[i + 1];
            let (a1, b1, c1) = spline.segment(i);
            let (a2, b2, c2) = spline.segment(i + 1);
            let v1 = (a1 * knot + b1) * knot + c1;
            let v2 = (a2 * knot + b2) * knot + c2;
            assert!((v1 - v2).abs() < 1e-9, "value jump at knot {knot}");
            let two = 2.0;
            let s1 = two * a1 * knot + b1;
            let s2 = two * a2 * knot + b2;
            assert!((s1 - s2).abs() < 1e-9, "slope jump at knot {knot}");
        }
    }

    #[test]
    fn interpolates_every_sample() {
        let xs: [f64; 3] = [0.0, 1.0, 2.0];
        let ys: [f64; 3] = [0.0, 1.0, 4.0];
        let spline = QuadraticSpline::fit(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert!((spline.eval(x) - y).abs() < 1e-9);
        }
        assert!((spline.eval(0.5) - 0.5).abs() < 1e-9);
        assert!((spline.eval(1.5) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = QuadraticSpline::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, SolveError::SampleMismatch { x_len: 3, y_len: 2 });
    }

    #[test]
    fn rejects_too_few_points() {
        let err = QuadraticSpline::fit(&[0.0, 1.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, SolveError::TooFewSamples { count: 2 });
    }
}
