use super::{Function, Registry};

pub(crate) fn register(registry: &mut Registry) {
    // "log" is the natural log, as in the standard math library.
    registry.insert("log", Function::unary(f64::ln));
    registry.insert("log10", Function::unary(f64::log10));
    registry.insert("exp", Function::unary(f64::exp));
    registry.insert("pow", Function::binary(f64::powf));
}
