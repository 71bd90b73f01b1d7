use tangent::Float;

use crate::convergence::ConvergenceParams;
use crate::objective::ScalarObjective;
use crate::result::{SolveError, SolveResult, Step};

/// Configuration for fixed-step gradient descent.
#[derive(Debug, Clone)]
pub struct DescentConfig<F> {
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
    /// Learning rate controlling the step size (default: 0.1).
    pub eta: F,
}

impl Default for DescentConfig<f64> {
    fn default() -> Self {
        DescentConfig {
            convergence: ConvergenceParams::default(),
            eta: 0.1,
        }
    }
}

impl Default for DescentConfig<f32> {
    fn default() -> Self {
        DescentConfig {
            convergence: ConvergenceParams::default(),
            eta: 0.1,
        }
    }
}

/// Fixed-step gradient descent for scalar minimization.
///
/// Each iteration evaluates `(y, d)` at the current iterate and proposes
/// `x' = x - eta·d`. Converges when `|x' - x| < epsilon`; exhausting the
/// iteration budget is [`SolveError::NoConvergence`].
pub fn gradient_descent<F: Float, O: ScalarObjective<F>>(
    obj: &mut O,
    x0: F,
    config: &DescentConfig<F>,
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

        let next = xn - config.eta * d;
        if (next - xn).abs() < config.convergence.epsilon {
            return Ok(SolveResult {
                x: next,
                value: y,
                derivative: d,
                iterations: iter,
                history,
            });
        }

        xn = next;
    }

    Err(SolveError::NoConvergence {
        max_iters: config.convergence.max_iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ExprObjective;

    fn config(epsilon: f64, max_iters: usize, eta: f64) -> DescentConfig<f64> {
        DescentConfig {
            convergence: ConvergenceParams::new(epsilon, max_iters),
            eta,
        }
    }

    #[test]
    fn minimizes_parabola() {
        let mut obj = ExprObjective::parse("x^2").unwrap();
        let result = gradient_descent(&mut obj, 1.0, &config(1e-4, 5000, 0.5)).unwrap();
        assert!(result.x.abs() < 1e-4, "x = {}", result.x);
    }

    #[test]
    fn minimizes_shifted_parabola() {
        // f(x) = (x - 3)², minimum at 3
        let mut obj = ExprObjective::parse("(x - 3)^2").unwrap();
        let result = gradient_descent(&mut obj, 0.0, &config(1e-8, 5000, 0.1)).unwrap();
        assert!((result.x - 3.0).abs() < 1e-6, "x = {}", result.x);
    }

    #[test]
    fn budget_exhaustion_is_no_convergence() {
        // Slope never flattens, so the step size never shrinks below epsilon.
        let mut obj = ExprObjective::parse("x").unwrap();
        let err = gradient_descent(&mut obj, 0.0, &config(1e-8, 50, 0.1)).unwrap_err();
        assert_eq!(err, SolveError::NoConvergence { max_iters: 50 });
    }
}
