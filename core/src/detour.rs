//! # DETOUR FACTORY
//!
//! **PURPOSE**: Wrap a callable so each declared parameter is sourced either from a
//! container (by name) or from the call site (by position).

use crate::dependencies::Container;
use crate::tokenizer::extract_from_callable;
use crate::types::{Callable, Value};

/// **CREATE DETOUR**
///
/// **PARAMETERS**:
/// - `container: &Container` - Container the wrapper resolves names against
/// - `callable: &Callable` - Callable to wrap
///
/// **RETURNS**: The callable itself when there is nothing to inject (no declared
/// parameters, or a signature the tokenizer rejects); otherwise a wrapper.
///
/// The wrapper calls the original with exactly one argument per declared
/// parameter. Positional arguments beyond that are dropped; missing ones become
/// `Value::Undefined`. The wrapper declares no parameters of its own, so
/// wrapping it again is a no-op.
pub fn create_detour(container: &Container, callable: &Callable) -> Callable {
    let extraction = extract_from_callable(callable);
    if !extraction.is_injectable() {
        if let Some(message) = &extraction.message {
            log::trace!("Bypassing injection: {}", message);
        }
        return callable.clone();
    }

    let names = extraction.names;
    let target = container.downgrade();
    let original = callable.clone();

    Callable::native(move |args| {
        let container = target.upgrade();
        let mut call_args = Vec::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            let resolved = match &container {
                Some(container) => container.resolve(name)?,
                None => None,
            };
            call_args.push(
                resolved.unwrap_or_else(|| args.get(index).cloned().unwrap_or(Value::Undefined)),
            );
        }

        original.call(&call_args)
    })
}
