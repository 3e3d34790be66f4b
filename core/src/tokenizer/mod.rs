pub mod scanner;
pub mod types;

pub use scanner::extract_from_source;
pub use types::Extraction;

use crate::types::{Callable, Signature, Value};

/// **PARAMETER NAME EXTRACTION**
///
/// **RETURNS**: Ordered parameter names, or a failed `Extraction` for non-callables
pub fn extract_parameter_names(value: &Value) -> Extraction {
    match value {
        Value::Callable(callable) => extract_from_callable(callable),
        _ => Extraction::failed(types::NOT_A_FUNCTION),
    }
}

pub fn extract_from_callable(callable: &Callable) -> Extraction {
    match callable.signature() {
        Signature::Source(text) => extract_from_source(text),
        Signature::Declared(names) => Extraction::succeeded(names.to_vec()),
    }
}
