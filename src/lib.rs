pub mod ast;
pub mod error;
pub mod functions;

pub use ast::{BinaryOp, Evaluator, Expr, FunctionMap, Parser, UnaryOp, VariableMap};
pub use error::{Error, EvalError, LexError, ParseError, SyntaxError};
pub use functions::{Arity, Function, NativeFn};

/// Parses a textual arithmetic expression into an [`Expr`] tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::parse_expression(input)
}

/// Evaluates a parsed tree against optional variable and function contexts.
///
/// Parsing does not consult the contexts, so the same tree can be evaluated
/// against different bindings without re-parsing.
pub fn evaluate(
    expr: &Expr,
    variables: Option<&VariableMap>,
    functions: Option<&FunctionMap>,
) -> Result<f64, EvalError> {
    Evaluator::new(variables, functions).evaluate(expr)
}

/// Parses and evaluates in one step.
pub fn evaluate_expression(
    input: &str,
    variables: Option<&VariableMap>,
    functions: Option<&FunctionMap>,
) -> Result<f64, Error> {
    let ast = parse(input)?;
    Ok(evaluate(&ast, variables, functions)?)
}
