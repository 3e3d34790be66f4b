//! # INJECTION FACADE
//!
//! **PURPOSE**: Public entry point for registering producers and taking over methods.
//!
//! ## USAGE
//!
//! ```rust
//! use detour_di::{Callable, Injector, Object, Producer, Value};
//! use serde_json::json;
//!
//! let mut injector = Injector::new();
//! injector.register("app", [Producer::singleton(
//!     "greeting",
//!     Callable::native(|_| Ok(Value::from(json!("hello")))),
//! )])?;
//!
//! let mut service = Object::new().with(
//!     "handle",
//!     Callable::native(|args| args[0].as_callable().unwrap().call(&[])),
//! );
//! injector.intercept("app", &mut service, "handle")?;
//!
//! let callback = Callable::new("function (greeting) {}", |args| Ok(args[0].clone()));
//! let result = service.invoke("handle", &[callback.into()])?;
//! assert_eq!(result, Value::from(json!("hello")));
//! # Ok::<(), detour_di::InjectError>(())
//! ```

use crate::config::ResolverConfig;
use crate::dependencies::{Container, Producer, Registry};
use crate::detour::create_detour;
use crate::errors::InjectError;
use crate::types::{Callable, Object, Value};

pub struct Injector {
    registry: Registry,
}

impl Injector {
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::from_registry(Registry::with_config(config))
    }

    pub fn from_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// **REGISTER PRODUCERS** - See [`Registry::register`]
    pub fn register<I>(&mut self, namespace: &str, producers: I) -> Result<(), InjectError>
    where
        I: IntoIterator<Item = Producer>,
    {
        self.registry.register(namespace, producers)
    }

    /// **RESOLVE BY NAME**
    ///
    /// **RETURNS**: `Ok(None)` when the namespace exists but `name` is not registered
    pub fn resolve(&self, namespace: &str, name: &str) -> Result<Option<Value>, InjectError> {
        self.container(namespace)?.resolve(name)
    }

    /// **TAKE OVER A METHOD**
    ///
    /// **PARAMETERS**:
    /// - `namespace: &str` - Namespace supplying injected values
    /// - `method_name: &str` - Name used in error reporting
    /// - `method: &Value` - The method to wrap
    ///
    /// **RETURNS**: A wrapper that detours every callable argument through the
    /// namespace's container before delegating to `method`. Non-callable
    /// arguments pass through untouched.
    pub fn take_over(
        &self,
        namespace: &str,
        method_name: &str,
        method: &Value,
    ) -> Result<Callable, InjectError> {
        let container = self.container(namespace)?;
        let original = match method {
            Value::Callable(callable) => callable.clone(),
            _ => {
                return Err(InjectError::NotCallable {
                    name: method_name.to_string(),
                })
            }
        };

        log::debug!("Taking over '{}' with namespace '{}'", method_name, namespace);
        let target = container.downgrade();

        Ok(Callable::native(move |args| {
            let container = target.upgrade();
            let args: Vec<Value> = args
                .iter()
                .map(|arg| match (arg, &container) {
                    (Value::Callable(callback), Some(container)) => {
                        Value::Callable(create_detour(container, callback))
                    }
                    _ => arg.clone(),
                })
                .collect();

            original.call(&args)
        }))
    }

    /// **INTERCEPT IN PLACE**
    ///
    /// Replaces `target[method_name]` with the wrapper from [`Injector::take_over`].
    /// The previous method is not kept anywhere for restoration.
    ///
    /// Callables carry no receiver: the method is invoked with the rewritten
    /// arguments only, never with `target`. Methods that need object state
    /// must capture it themselves (e.g. an `Rc<RefCell<_>>` shared with the owner).
    pub fn intercept(
        &self,
        namespace: &str,
        target: &mut Object,
        method_name: &str,
    ) -> Result<(), InjectError> {
        let method = target.get(method_name).cloned().unwrap_or(Value::Undefined);
        let takeover = self.take_over(namespace, method_name, &method)?;
        target.set(method_name, takeover);
        Ok(())
    }

    fn container(&self, namespace: &str) -> Result<Container, InjectError> {
        self.registry
            .container(namespace)
            .ok_or_else(|| InjectError::NamespaceNotFound {
                namespace: namespace.to_string(),
            })
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}
