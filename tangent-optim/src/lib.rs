//! Gradient-based numerical algorithms on top of the `tangent` AD core.
//!
//! Each solver repeatedly evaluates a [`ScalarObjective`] — typically a
//! parsed [`Expression`](tangent::Expression) wrapped in [`ExprObjective`] —
//! at the current iterate, reads off the exact `(value, derivative)` pair
//! from the dual-number evaluation, and applies its update rule until
//! convergence or the iteration budget runs out. Every iteration is recorded
//! in the returned history for downstream diagnostics and plotting.

pub mod convergence;
pub mod linalg;
pub mod objective;
pub mod result;
pub mod solvers;
pub mod spline;

pub use convergence::ConvergenceParams;
pub use objective::{ExprObjective, ScalarObjective};
pub use result::{NesterovResult, NesterovStep, SolveError, SolveResult, Step};
pub use solvers::gradient_descent::{gradient_descent, DescentConfig};
pub use solvers::nesterov::{nesterov, NesterovConfig};
pub use solvers::newton::{newton, NewtonConfig};
pub use spline::QuadraticSpline;
