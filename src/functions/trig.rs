use super::{Function, Registry};

pub(crate) fn register(registry: &mut Registry) {
    registry.insert("sin", Function::unary(f64::sin));
    registry.insert("cos", Function::unary(f64::cos));
    registry.insert("tan", Function::unary(f64::tan));
    registry.insert("asin", Function::unary(f64::asin));
    registry.insert("acos", Function::unary(f64::acos));
    registry.insert("atan", Function::unary(f64::atan));
    registry.insert("sinh", Function::unary(f64::sinh));
    registry.insert("cosh", Function::unary(f64::cosh));
    registry.insert("tanh", Function::unary(f64::tanh));
}
