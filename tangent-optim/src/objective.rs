use tangent::error::{AdError, ParseError};
use tangent::{Expression, Float};

/// Trait for scalar solver objectives.
///
/// Implementors provide the `(value, derivative)` pair at a scalar iterate.
/// Methods take `&mut self` to allow eval counting and internal caching.
pub trait ScalarObjective<F: Float> {
    /// Evaluate the objective and its derivative at `x`.
    fn eval(&mut self, x: F) -> Result<(F, F), AdError>;
}

/// Adapter wrapping a parsed [`Expression`] as a [`ScalarObjective`].
///
/// Every evaluation seeds `x` as the dual variable, so the derivative comes
/// out of the same pass as the value.
pub struct ExprObjective {
    expr: Expression,
    func_evals: usize,
}

impl ExprObjective {
    /// Wrap an already-parsed expression.
    pub fn new(expr: Expression) -> Self {
        ExprObjective {
            expr,
            func_evals: 0,
        }
    }

    /// Parse an expression string and wrap it, e.g. `"x^2 - 5*x + 1"`.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Ok(ExprObjective::new(Expression::parse(source)?))
    }

    /// Number of function evaluations performed so far.
    pub fn func_evals(&self) -> usize {
        self.func_evals
    }

    /// Borrow the underlying expression.
    pub fn expr(&self) -> &Expression {
        &self.expr
    }
}

impl<F: Float> ScalarObjective<F> for ExprObjective {
    fn eval(&mut self, x: F) -> Result<(F, F), AdError> {
        self.func_evals += 1;
        self.expr.eval_dual(x)
    }
}
