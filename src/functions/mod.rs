use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

mod aggregate;
mod exponential;
mod rounding;
mod trig;

/// Number of arguments a function accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Variadic: any argument count is accepted.
    Any,
}

/// The callable backing a function. Arguments are already evaluated,
/// left to right, by the time it is invoked.
pub type NativeFn = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// A callable together with its declared arity.
///
/// Fixed-arity functions are only ever invoked with exactly `arity`
/// arguments; the evaluator rejects mismatches before the call.
#[derive(Clone)]
pub struct Function {
    pub arity: Arity,
    pub call: NativeFn,
}

impl Function {
    pub fn new(arity: Arity, call: impl Fn(&[f64]) -> f64 + Send + Sync + 'static) -> Self {
        Function {
            arity,
            call: Arc::new(call),
        }
    }

    pub(crate) fn unary(f: fn(f64) -> f64) -> Self {
        Function::new(Arity::Exact(1), move |args| f(args[0]))
    }

    pub(crate) fn binary(f: fn(f64, f64) -> f64) -> Self {
        Function::new(Arity::Exact(2), move |args| f(args[0], args[1]))
    }

    /// Folds all supplied arguments pairwise, e.g. `max`/`min`.
    pub(crate) fn fold(f: fn(f64, f64) -> f64) -> Self {
        Function::new(Arity::Any, move |args| {
            args.iter().copied().reduce(f).unwrap_or(f64::NAN)
        })
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

pub(crate) type Registry = HashMap<&'static str, Function>;

/// The built-in function table: populated once, read-only afterwards,
/// shared process-wide. Consulted before any caller-supplied context.
static BUILTINS: LazyLock<Registry> = LazyLock::new(|| {
    let mut registry = Registry::new();
    rounding::register(&mut registry);
    trig::register(&mut registry);
    exponential::register(&mut registry);
    aggregate::register(&mut registry);
    registry
});

/// Looks up a built-in function by its (lowercased) name.
pub fn builtin(name: &str) -> Option<&'static Function> {
    BUILTINS.get(name)
}
