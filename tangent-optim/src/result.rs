use std::fmt;

use tangent::error::AdError;

/// One recorded iteration: the iterate and the `(value, derivative)` pair
/// evaluated during that step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<F> {
    /// Iterate at the start of the step.
    pub x: F,
    /// Objective value evaluated this step.
    pub value: F,
    /// Derivative evaluated this step.
    pub derivative: F,
}

/// Result of a Newton or gradient-descent run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult<F> {
    /// Solution point.
    pub x: F,
    /// Objective value at the last evaluation.
    pub value: F,
    /// Derivative at the last evaluation.
    pub derivative: F,
    /// Number of iterations performed before convergence.
    pub iterations: usize,
    /// Per-iteration records, in order. Never truncated.
    pub history: Vec<Step<F>>,
}

/// One recorded Nesterov iteration.
///
/// `momentum` is the coefficient at iteration entry, so a restart shows up
/// in the history as a reset to 1 on the following step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NesterovStep<F> {
    /// Iterate at the start of the step.
    pub x: F,
    /// Objective value at the momentum point.
    pub value: F,
    /// Derivative at the momentum point.
    pub derivative: F,
    /// Momentum coefficient at iteration entry.
    pub momentum: F,
}

/// Result of a Nesterov accelerated-descent run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NesterovResult<F> {
    /// Solution point.
    pub x: F,
    /// Objective value at the last evaluation.
    pub value: F,
    /// Derivative at the last evaluation.
    pub derivative: F,
    /// Number of iterations performed before convergence.
    pub iterations: usize,
    /// How many times the overshoot condition reset the momentum.
    pub restarts: usize,
    /// Per-iteration records, in order. Never truncated.
    pub history: Vec<NesterovStep<F>>,
}

/// Why a solver or the spline fit failed.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// Newton's method hit a stationary point.
    ZeroDerivative {
        /// Iterate at which the derivative vanished.
        x: f64,
    },
    /// The iteration budget was exhausted without meeting the epsilon
    /// criterion.
    NoConvergence {
        /// The budget that was exhausted.
        max_iters: usize,
    },
    /// The spline linear system is singular.
    SingularSystem,
    /// Sample vectors have different lengths.
    SampleMismatch { x_len: usize, y_len: usize },
    /// Fewer than three sample points.
    TooFewSamples { count: usize },
    /// Evaluating the objective failed.
    Eval(AdError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::ZeroDerivative { x } => {
                write!(f, "reached zero derivative at x = {x}; no solution found")
            }
            SolveError::NoConvergence { max_iters } => {
                write!(f, "no solution found after {max_iters} iterations")
            }
            SolveError::SingularSystem => write!(f, "spline system is singular"),
            SolveError::SampleMismatch { x_len, y_len } => {
                write!(f, "sample length mismatch: {x_len} x values vs {y_len} y values")
            }
            SolveError::TooFewSamples { count } => {
                write!(f, "too few sample points for spline interpolation: {count} (need 3)")
            }
            SolveError::Eval(e) => write!(f, "objective evaluation failed: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Eval(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AdError> for SolveError {
    fn from(e: AdError) -> Self {
        SolveError::Eval(e)
    }
}

impl From<tangent::ParseError> for SolveError {
    fn from(e: tangent::ParseError) -> Self {
        SolveError::Eval(AdError::Parse(e))
    }
}
