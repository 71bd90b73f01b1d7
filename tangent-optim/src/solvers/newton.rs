use tangent::Float;

use crate::convergence::ConvergenceParams;
use crate::objective::ScalarObjective;
use crate::result::{SolveError, SolveResult, Step};

/// Configuration for Newton root finding.
#[derive(Debug, Clone)]
pub struct NewtonConfig<F> {
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
}

impl Default for NewtonConfig<f64> {
    fn default() -> Self {
        NewtonConfig {
            convergence: ConvergenceParams::default(),
        }
    }
}

impl Default for NewtonConfig<f32> {
    fn default() -> Self {
        NewtonConfig {
            convergence: ConvergenceParams::default(),
        }
    }
}

/// Newton's root-finding method for scalar functions.
///
/// Starting from `x0`, each iteration evaluates `(y, d)` at the current
/// iterate and applies `x ← x - y/d`. Converges when `|y| < epsilon`.
/// A vanishing derivative is [`SolveError::ZeroDerivative`]; exhausting the
/// iteration budget is [`SolveError::NoConvergence`].
pub fn newton<F: Float, O: ScalarObjective<F>>(
    obj: &mut O,
    x0: F,
    config: &NewtonConfig<F>,
) -> Result<SolveResult<F>, SolveError> {
    let mut xn = x0;
    let mut history = Vec::new();

    for iter in 0..config.convergence.max_iters {
        let (y, d) = obj.eval(xn)?;
        history.push(Step {
            x: xn,
            value: y,
            derivative: d,
        });

        if y.abs() < config.convergence.epsilon {
            return Ok(SolveResult {
                x: xn,
                value: y,
                derivative: d,
                iterations: iter,
                history,
            });
        }

        if d == F::zero() {
            return Err(SolveError::ZeroDerivative {
                x: xn.to_f64().unwrap_or(f64::NAN),
            });
        }

        xn = xn - y / d;
    }

    Err(SolveError::NoConvergence {
        max_iters: config.convergence.max_iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ExprObjective;
    use tangent::error::AdError;
    use tangent::Dual;

    /// f(x) = x² - 4, root at 2.
    struct ShiftedParabola;

    impl ScalarObjective<f64> for ShiftedParabola {
        fn eval(&mut self, x: f64) -> Result<(f64, f64), AdError> {
            let d = Dual::variable(x).powi(2) - 4.0;
            Ok((d.re, d.eps))
        }
    }

    #[test]
    fn converges_on_parabola_root() {
        let mut obj = ShiftedParabola;
        let config = NewtonConfig::default();
        let result = newton(&mut obj, 3.0, &config).unwrap();
        assert!((result.x - 2.0).abs() < 1e-6, "x = {}", result.x);
        assert_eq!(result.history.len(), result.iterations + 1);
    }

    #[test]
    fn zero_derivative_is_reported() {
        let mut obj = ShiftedParabola;
        let config = NewtonConfig::default();
        let err = newton(&mut obj, 0.0, &config).unwrap_err();
        assert!(matches!(err, SolveError::ZeroDerivative { .. }));
    }

    #[test]
    fn history_records_every_iterate() {
        let mut obj = ExprObjective::parse("x^2 - 2").unwrap();
        let config = NewtonConfig {
            convergence: ConvergenceParams::new(1e-10, 100),
        };
        let result = newton(&mut obj, 2.0, &config).unwrap();
        assert_eq!(result.history[0].x, 2.0);
        assert_eq!(result.history[0].value, 2.0);
        assert_eq!(result.history[0].derivative, 4.0);
        assert_eq!(obj.func_evals(), result.history.len());
    }
}
