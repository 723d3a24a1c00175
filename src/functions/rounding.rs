use super::{Function, Registry};

pub(crate) fn register(registry: &mut Registry) {
    registry.insert("floor", Function::unary(f64::floor));
    registry.insert("ceil", Function::unary(f64::ceil));
    registry.insert("round", Function::unary(f64::round));
}
