use crate::types::{Callable, Value};
use once_cell::unsync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyScope {
    Singleton,
    Transient,
}

/// **PRODUCER DESCRIPTOR**
///
/// **PURPOSE**: What callers hand to `register`; the callable is wrapped on registration
#[derive(Debug, Clone)]
pub struct Producer {
    pub name: String,
    pub func: Callable,
    pub scope: DependencyScope,
}

impl Producer {
    /// **TRANSIENT PRODUCER** - Invoked on every resolution
    pub fn new(name: impl Into<String>, func: Callable) -> Self {
        Self::with_scope(name, func, DependencyScope::Transient)
    }

    /// **SINGLETON PRODUCER** - Invoked once, result cached
    pub fn singleton(name: impl Into<String>, func: Callable) -> Self {
        Self::with_scope(name, func, DependencyScope::Singleton)
    }

    pub fn with_scope(name: impl Into<String>, func: Callable, scope: DependencyScope) -> Self {
        Self {
            name: name.into(),
            func,
            scope,
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.scope == DependencyScope::Singleton
    }
}

pub(crate) struct DependencyEntry {
    pub(crate) producer: Callable,
    pub(crate) scope: DependencyScope,
    pub(crate) instance: OnceCell<Value>,
}

impl DependencyEntry {
    pub(crate) fn new(producer: Callable, scope: DependencyScope) -> Self {
        Self {
            producer,
            scope,
            instance: OnceCell::new(),
        }
    }
}
