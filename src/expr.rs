//! Parsed expressions and their dual-number evaluator.
//!
//! An [`Expression`] is built once from a source string and evaluated any
//! number of times at different seeds. Every function call in the tree is
//! routed through the elementary-function table ([`Func`]) so derivative
//! propagation is preserved end to end; evaluating with a plain float seed
//! computes values only.

use crate::error::{AdError, ParseError};
use crate::float::Float;
use crate::parser;
use crate::scalar::DualNum;

/// The elementary-function table: every name the parser recognizes as a
/// prefix call.
///
/// Names resolve by exact match, so `sin` and `sinh` can never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Exp,
    Ln,
    Log2,
    Log10,
    Logistic,
}

impl Func {
    /// Look up a function by its surface name in the expression grammar.
    pub fn from_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "arcsin" => Func::Asin,
            "arccos" => Func::Acos,
            "arctan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "sqrt" => Func::Sqrt,
            "exp" => Func::Exp,
            "log" => Func::Ln,
            "log2" => Func::Log2,
            "log10" => Func::Log10,
            "logistic" => Func::Logistic,
            _ => return None,
        })
    }

    /// The surface name used in expression source.
    pub fn name(&self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "arcsin",
            Func::Acos => "arccos",
            Func::Atan => "arctan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Sqrt => "sqrt",
            Func::Exp => "exp",
            Func::Ln => "log",
            Func::Log2 => "log2",
            Func::Log10 => "log10",
            Func::Logistic => "logistic",
        }
    }

    /// Apply the function to a dual seed, chain rule included.
    pub fn apply<F: Float, T: DualNum<F>>(&self, x: &T) -> Result<T, AdError> {
        Ok(match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Asin => x.try_asin()?,
            Func::Acos => x.try_acos()?,
            Func::Atan => x.atan(),
            Func::Sinh => x.sinh(),
            Func::Cosh => x.cosh(),
            Func::Tanh => x.tanh(),
            Func::Sqrt => x.try_sqrt()?,
            Func::Exp => x.exp(),
            Func::Ln => x.try_ln()?,
            Func::Log2 => x.try_log2()?,
            Func::Log10 => x.try_log10()?,
            Func::Logistic => x.logistic(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
    Const(f64),
    Var,
    Call(Func, Box<Node>),
    Neg(Box<Node>),
    Bin(BinOp, Box<Node>, Box<Node>),
}

/// A parsed expression in the single free variable `x`.
///
/// Parsing is a pure one-time translation; the resulting tree is immutable
/// and reusable across seeds. Evaluating at a [`Dual`](crate::Dual) or
/// [`MultiDual`](crate::MultiDual) seed yields the exact derivative with
/// respect to the seed's variable(s).
#[derive(Clone, Debug)]
pub struct Expression {
    root: Node,
    source: String,
}

impl Expression {
    /// Parse an infix expression string, e.g. `"exp(sin(x)) - cos(x^0.5)"`.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = parser::parse_source(source)?;
        Ok(Expression {
            root,
            source: source.to_string(),
        })
    }

    /// The original source string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at a seed bound to `x`.
    ///
    /// Division by zero and out-of-domain function arguments surface as
    /// [`AdError`]s at this point — never as silently wrong numbers.
    pub fn eval<F: Float, T: DualNum<F>>(&self, x: &T) -> Result<T, AdError> {
        eval_node(&self.root, x)
    }

    /// Evaluate at a scalar iterate, seeding `x` as the variable.
    ///
    /// Returns `(value, derivative)` — the form the solvers consume.
    pub fn eval_dual<F: Float>(&self, x: F) -> Result<(F, F), AdError> {
        let d = self.eval(&crate::Dual::variable(x))?;
        Ok((d.re, d.eps))
    }
}

/// A literal exponent, possibly negated, enables the constant-power rule
/// (exact for negative bases with integer exponents).
fn literal_exponent(node: &Node) -> Option<f64> {
    match node {
        Node::Const(c) => Some(*c),
        Node::Neg(inner) => match inner.as_ref() {
            Node::Const(c) => Some(-*c),
            _ => None,
        },
        _ => None,
    }
}

fn eval_node<F: Float, T: DualNum<F>>(node: &Node, x: &T) -> Result<T, AdError> {
    match node {
        Node::Const(c) => Ok(x.lift(F::from(*c).unwrap())),
        Node::Var => Ok(x.clone()),
        Node::Neg(inner) => Ok(eval_node(inner, x)?.neg()),
        Node::Call(func, arg) => func.apply(&eval_node(arg, x)?),
        Node::Bin(BinOp::Pow, base, exponent) => {
            let b = eval_node(base, x)?;
            match literal_exponent(exponent) {
                Some(k) => b.try_powf(F::from(k).unwrap()),
                None => {
                    let e = eval_node(exponent, x)?;
                    b.try_pow(&e)
                }
            }
        }
        Node::Bin(op, lhs, rhs) => {
            let l = eval_node(lhs, x)?;
            let r = eval_node(rhs, x)?;
            match op {
                BinOp::Add => l.try_add(&r),
                BinOp::Sub => l.try_sub(&r),
                BinOp::Mul => l.try_mul(&r),
                BinOp::Div => l.try_div(&r),
                BinOp::Pow => unreachable!("handled above"),
            }
        }
    }
}
