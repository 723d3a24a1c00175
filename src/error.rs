use thiserror::Error;

/// Errors raised while turning raw input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot begin any token.
    #[error("invalid syntax at character '{0}'")]
    InvalidCharacter(char),
    /// A numeral with more than one decimal point, e.g. `1.2.3`.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Errors raised while assembling tokens into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A token that cannot start a primary expression, e.g. the `*` in `* 5`.
    #[error("invalid syntax at '{0}'")]
    InvalidPrimary(String),
    /// A leftover token where an operator or closing delimiter was expected.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    /// Input ran out mid-expression.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A `)` with no matching open parenthesis.
    #[error("unexpected ')'")]
    UnmatchedParen,
}

/// Any failure produced by [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Errors raised while evaluating a parsed expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Numeral text that does not parse as a floating-point value.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// A variable absent from the binding context (or no context given).
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
    /// A function found neither in the built-in table nor the caller context.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    /// A fixed-arity function invoked with the wrong number of arguments.
    #[error("function '{name}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
}

/// Union of parse- and evaluation-time failures, for one-shot callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
