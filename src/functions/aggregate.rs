use super::{Function, Registry};

pub(crate) fn register(registry: &mut Registry) {
    registry.insert("max", Function::fold(f64::max));
    registry.insert("min", Function::fold(f64::min));
}
