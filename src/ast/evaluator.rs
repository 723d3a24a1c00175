use std::collections::HashMap;

use log::trace;

use crate::ast::Expr;
use crate::error::EvalError;
use crate::functions::{self, Arity, Function};

/// Variable bindings: lowercased name to numeric value.
pub type VariableMap = HashMap<String, f64>;

/// Caller-supplied functions: lowercased name to callable-with-arity.
pub type FunctionMap = HashMap<String, Function>;

/// Tree-walking evaluator over optional variable and function contexts.
///
/// Borrows its contexts for the duration of one walk; the tree itself is
/// never mutated, so the same tree can be re-evaluated against different
/// bindings without re-parsing.
pub struct Evaluator<'ctx> {
    variables: Option<&'ctx VariableMap>,
    functions: Option<&'ctx FunctionMap>,
}

impl<'ctx> Evaluator<'ctx> {
    pub fn new(
        variables: Option<&'ctx VariableMap>,
        functions: Option<&'ctx FunctionMap>,
    ) -> Self {
        Evaluator {
            variables,
            functions,
        }
    }

    /// Recursively computes the numeric value of `expr`.
    pub fn evaluate(&self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Number(text) => text
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidNumber(text.clone())),
            Expr::Variable(name) => self
                .variables
                .and_then(|variables| variables.get(name))
                .copied()
                .ok_or_else(|| EvalError::UnknownVariable(name.clone())),
            Expr::Unary { op, operand } => Ok(op.apply(self.evaluate(operand)?)),
            Expr::Binary { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                op.apply(left, right)
            }
            Expr::Call { name, args } => self.call(name, args),
        }
    }

    /// Resolves `name` against the built-in table first and the caller
    /// context second, so built-in math names stay stable even when a
    /// caller supplies a function of the same name.
    fn call(&self, name: &str, args: &[Expr]) -> Result<f64, EvalError> {
        let function = functions::builtin(name)
            .or_else(|| self.functions.and_then(|functions| functions.get(name)))
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;

        if let Arity::Exact(expected) = function.arity {
            if expected != args.len() {
                return Err(EvalError::ArityMismatch {
                    name: name.to_string(),
                    expected,
                    actual: args.len(),
                });
            }
        }

        let values = args
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<Result<Vec<f64>, EvalError>>()?;
        trace!("call {name}({values:?})");
        Ok((function.call)(&values))
    }
}
