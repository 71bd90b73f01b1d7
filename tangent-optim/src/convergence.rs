use tangent::Float;

/// Parameters controlling convergence checks.
///
/// `max_iters` is a hard cap: every solver loop is bounded by it and
/// exhausting it is reported as
/// [`SolveError::NoConvergence`](crate::SolveError::NoConvergence).
#[derive(Debug, Clone)]
pub struct ConvergenceParams<F> {
    /// Solution accuracy threshold (default: 1e-6).
    pub epsilon: F,
    /// Maximum number of iterations (default: 500).
    pub max_iters: usize,
}

impl Default for ConvergenceParams<f64> {
    fn default() -> Self {
        ConvergenceParams {
            epsilon: 1e-6,
            max_iters: 500,
        }
    }
}

impl Default for ConvergenceParams<f32> {
    fn default() -> Self {
        ConvergenceParams {
            epsilon: 1e-4,
            max_iters: 500,
        }
    }
}

impl<F: Float> ConvergenceParams<F> {
    /// Construct explicit parameters.
    pub fn new(epsilon: F, max_iters: usize) -> Self {
        ConvergenceParams { epsilon, max_iters }
    }
}
