use std::fmt;

use crate::float::Float;

/// Errors surfaced while combining dual numbers or evaluating an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum AdError {
    /// Seed-vector lengths disagree in a binary multi-tangent operation.
    DimensionMismatch {
        /// Seed dimension of the left operand.
        left: usize,
        /// Seed dimension of the right operand.
        right: usize,
    },
    /// Division by a dual number whose value is zero.
    DivisionByZero,
    /// An elementary function or power was evaluated outside its domain.
    Domain {
        /// The function or operation that rejected the argument.
        func: &'static str,
        /// The offending argument value.
        arg: f64,
    },
    /// The expression source failed to parse.
    Parse(ParseError),
}

impl AdError {
    pub(crate) fn domain<F: Float>(func: &'static str, arg: F) -> Self {
        AdError::Domain {
            func,
            arg: arg.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for AdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdError::DimensionMismatch { left, right } => {
                write!(f, "seed dimension mismatch: {left} vs {right}")
            }
            AdError::DivisionByZero => write!(f, "division by a zero-valued dual number"),
            AdError::Domain { func, arg } => {
                write!(f, "{func} is undefined at argument {arg}")
            }
            AdError::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for AdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for AdError {
    fn from(e: ParseError) -> Self {
        AdError::Parse(e)
    }
}

/// Errors produced while tokenizing or parsing an expression string.
///
/// Positions are character offsets into the source string.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The source contained no tokens.
    Empty,
    /// A character outside the expression grammar.
    UnexpectedChar { ch: char, pos: usize },
    /// An identifier used as a function call that is not in the
    /// elementary-function table.
    UnknownFunction { name: String, pos: usize },
    /// An identifier other than the free variable `x`.
    UnknownVariable { name: String, pos: usize },
    /// A token that cannot start or continue the current production.
    UnexpectedToken { found: String, pos: usize },
    /// An opening parenthesis with no matching `)`.
    UnbalancedParen { pos: usize },
    /// The source ended where an operand was required.
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty expression"),
            ParseError::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected character '{ch}' at position {pos}")
            }
            ParseError::UnknownFunction { name, pos } => {
                write!(f, "unknown function '{name}' at position {pos}")
            }
            ParseError::UnknownVariable { name, pos } => {
                write!(f, "unknown variable '{name}' at position {pos} (only 'x' is bound)")
            }
            ParseError::UnexpectedToken { found, pos } => {
                write!(f, "unexpected {found} at position {pos}")
            }
            ParseError::UnbalancedParen { pos } => {
                write!(f, "unclosed parenthesis opened at position {pos}")
            }
            ParseError::UnexpectedEnd => write!(f, "unexpected end of expression"),
        }
    }
}

impl std::error::Error for ParseError {}
