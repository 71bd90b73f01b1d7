use tangent::Float;

use crate::convergence::ConvergenceParams;
use crate::objective::ScalarObjective;
use crate::result::{NesterovResult, NesterovStep, SolveError};

/// Configuration for Nesterov accelerated gradient descent.
#[derive(Debug, Clone)]
pub struct NesterovConfig<F> {
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
    /// Learning rate controlling the step size (default: 0.1).
    pub eta: F,
}

impl Default for NesterovConfig<f64> {
    fn default() -> Self {
        NesterovConfig {
            convergence: ConvergenceParams::default(),
            eta: 0.1,
        }
    }
}

impl Default for NesterovConfig<f32> {
    fn default() -> Self {
        NesterovConfig {
            convergence: ConvergenceParams::default(),
            eta: 0.1,
        }
    }
}

/// Nesterov's accelerated gradient descent with momentum restarts.
///
/// The gradient is evaluated at the momentum point `y`, not the iterate:
///
/// - `t' = (1 + √(1 + 4t²)) / 2`
/// - `x' = y - eta·d`
/// - `y' = x' + ((t - 1)/t')·(x' - x)`
///
/// When the step moves against the gradient direction
/// (`(y - x')·(x' - x) > 0`, overshoot past the minimum), the momentum point
/// and coefficient are reset (`y' = x'`, `t' = 1`). Without this restart the
/// method can oscillate indefinitely on sharply curved functions. The reset
/// is visible in the history as `momentum` returning to 1.
pub fn nesterov<F: Float, O: ScalarObjective<F>>(
    obj: &mut O,
    x0: F,
    config: &NesterovConfig<F>,
) -> Result<NesterovResult<F>, SolveError> {
    let half = F::from(0.5).unwrap();
    let four = F::from(4.0).unwrap();

    let mut xn = x0;
    let mut yn = x0;
    let mut t = F::one();
    let mut restarts = 0;
    let mut history = Vec::new();

    for iter in 0..config.convergence.max_iters {
        let (y, d) = obj.eval(yn)?;
        history.push(NesterovStep {
            x: xn,
            value: y,
            derivative: d,
            momentum: t,
        });

        let mut t_next = half * (F::one() + (F::one() + four * t * t).sqrt());
        let x_next = yn - config.eta * d;
        let mut y_next = x_next + ((t - F::one()) / t_next) * (x_next - xn);

        if (x_next - xn).abs() < config.convergence.epsilon {
            return Ok(NesterovResult {
                x: x_next,
                value: y,
                derivative: d,
                iterations: iter,
                restarts,
                history,
            });
        }

        // Overshoot: the momentum-corrected step moved uphill.
        if (yn - x_next) * (x_next - xn) > F::zero() {
            y_next = x_next;
            t_next = F::one();
            restarts += 1;
        }

        xn = x_next;
        yn = y_next;
        t = t_next;
    }

    Err(SolveError::NoConvergence {
        max_iters: config.convergence.max_iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ExprObjective;

    fn config(epsilon: f64, max_iters: usize, eta: f64) -> NesterovConfig<f64> {
        NesterovConfig {
            convergence: ConvergenceParams::new(epsilon, max_iters),
            eta,
        }
    }

    #[test]
    fn minimizes_parabola() {
        let mut obj = ExprObjective::parse("x^2").unwrap();
        let result = nesterov(&mut obj, 1.0, &config(1e-6, 5000, 0.1)).unwrap();
        assert!(result.x.abs() < 1e-3, "x = {}", result.x);
    }

    #[test]
    fn momentum_grows_until_restart() {
        let mut obj = ExprObjective::parse("10*x^2").unwrap();
        let result = nesterov(&mut obj, 1.0, &config(1e-6, 5000, 0.001)).unwrap();
        // The coefficient grows monotonically between restarts.
        assert!(result.history[1].momentum > result.history[0].momentum);
        assert!(result.restarts > 0);
    }

    #[test]
    fn budget_exhaustion_is_no_convergence() {
        let mut obj = ExprObjective::parse("x").unwrap();
        let err = nesterov(&mut obj, 0.0, &config(1e-8, 50, 0.1)).unwrap_err();
        assert_eq!(err, SolveError::NoConvergence { max_iters: 50 });
    }
}
