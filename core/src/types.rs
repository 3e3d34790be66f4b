//! # DETOUR TYPE DEFINITIONS
//!
//! **CRITICAL**: Runtime values that flow through producers, detours and intercepted methods
//! **MANDATE**: ALL injectable arguments and return values MUST be expressed as `Value`

use crate::errors::InjectError;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Native body of a callable: positional arguments in, one value out.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, InjectError>;

/// **RUNTIME VALUE**
///
/// **PURPOSE**: Dynamically typed argument passed to and returned from callables
/// **GUARANTEE**: Cloning never deep-copies objects; identity survives injection
#[derive(Clone)]
pub enum Value {
    /// **ABSENT ARGUMENT** - Supplied for declared parameters the caller left out
    Undefined,

    /// **PLAIN DATA**
    Json(serde_json::Value),

    /// **OPAQUE INSTANCE** - Compared by identity
    Object(Rc<dyn Any>),

    /// **CALLABLE** - Eligible for detour wrapping when passed to an intercepted method
    Callable(Callable),
}

impl Value {
    /// **OBJECT CONSTRUCTOR**
    pub fn object<T: Any>(instance: T) -> Self {
        Value::Object(Rc::new(instance))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Object(instance) => instance.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// **IDENTITY CHECK**
    ///
    /// True only when both values share one allocation. Plain data never does.
    pub fn same_instance(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Json(a), Value::Json(b)) => a == b,
            _ => self.same_instance(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Json(value) => write!(f, "Json({})", value),
            Value::Object(instance) => write!(f, "Object({:p})", Rc::as_ptr(instance) as *const ()),
            Value::Callable(callable) => write!(f, "Callable({:?})", callable.signature()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Json(value)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Callable(callable)
    }
}

/// **CALLABLE SIGNATURE**
///
/// **PURPOSE**: Where the tokenizer learns a callable's positional parameter names
#[derive(Debug, Clone, PartialEq)]
pub enum Signature {
    /// **DECLARATION TEXT** - Verbatim header, comments and whitespace included
    Source(Rc<str>),

    /// **EXPLICIT METADATA** - Parameter names in positional order
    Declared(Rc<[String]>),
}

/// **CALLABLE**
///
/// **PURPOSE**: Shared native function paired with the signature used for injection
/// **GUARANTEE**: Clones share the same function; identity is preserved
#[derive(Clone)]
pub struct Callable {
    signature: Signature,
    func: Rc<NativeFn>,
}

impl Callable {
    /// **CONSTRUCTOR FROM DECLARATION TEXT**
    ///
    /// **PARAMETERS**:
    /// - `source` - Declaration header such as `function (db, logger) {}`
    /// - `func` - Body invoked with the positional arguments
    pub fn new<F>(source: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InjectError> + 'static,
    {
        let source: String = source.into();
        Self {
            signature: Signature::Source(Rc::from(source)),
            func: Rc::new(func),
        }
    }

    /// **CONSTRUCTOR FROM EXPLICIT PARAMETER NAMES**
    pub fn declared<I, S, F>(params: I, func: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&[Value]) -> Result<Value, InjectError> + 'static,
    {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        Self {
            signature: Signature::Declared(Rc::from(params)),
            func: Rc::new(func),
        }
    }

    /// **NATIVE CONSTRUCTOR** - No declared parameters, nothing to inject
    pub fn native<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, InjectError> + 'static,
    {
        Self::declared(Vec::<String>::new(), func)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, InjectError> {
        (self.func)(args)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Rc::as_ptr(&self.func) as *const () == Rc::as_ptr(&other.func) as *const ()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// **TARGET OBJECT**
///
/// **PURPOSE**: Named property table whose callable entries can be intercepted in place
#[derive(Debug, Clone, Default)]
pub struct Object {
    properties: HashMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// **BUILDER** - Chainable property assignment
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    /// **METHOD INVOCATION**
    ///
    /// **RETURNS**: `Err(NotCallable)` when the property is missing or not a function
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, InjectError> {
        match self.properties.get(name) {
            Some(Value::Callable(method)) => method.call(args),
            _ => Err(InjectError::NotCallable {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Database {
        url: String,
    }

    #[test]
    fn test_object_identity() {
        let a = Value::object(Database {
            url: "postgres://localhost".to_string(),
        });
        let b = a.clone();
        let c = Value::object(Database {
            url: "postgres://localhost".to_string(),
        });

        assert!(a.same_instance(&b));
        assert!(!a.same_instance(&c));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.downcast_ref::<Database>().unwrap().url, "postgres://localhost");
    }

    #[test]
    fn test_json_equality_is_structural() {
        assert_eq!(Value::from(json!({"a": 1})), Value::from(json!({"a": 1})));
        assert!(!Value::from(json!(1)).same_instance(&Value::from(json!(1))));
        assert_eq!(Value::Undefined, Value::Undefined);
    }

    #[test]
    fn test_callable_call_and_identity() {
        let add = Callable::new("function (a, b) {}", |args| {
            let a = args[0].as_json().and_then(|v| v.as_i64()).unwrap_or(0);
            let b = args[1].as_json().and_then(|v| v.as_i64()).unwrap_or(0);
            Ok(Value::from(json!(a + b)))
        });
        let same = add.clone();

        assert_eq!(
            add.call(&[json!(2).into(), json!(3).into()]).unwrap(),
            Value::from(json!(5))
        );
        assert!(add.ptr_eq(&same));
        assert!(matches!(add.signature(), Signature::Source(text) if text.starts_with("function")));
    }

    #[test]
    fn test_native_callable_declares_nothing() {
        let noop = Callable::native(|_| Ok(Value::Undefined));
        match noop.signature() {
            Signature::Declared(names) => assert!(names.is_empty()),
            other => panic!("Expected declared signature, got {:?}", other),
        }
    }

    #[test]
    fn test_object_invoke() {
        let obj = Object::new()
            .with("greet", Callable::native(|_| Ok(Value::from(json!("hi")))))
            .with("name", Value::from(json!("service")));

        assert_eq!(obj.invoke("greet", &[]).unwrap(), Value::from(json!("hi")));
        assert!(matches!(
            obj.invoke("name", &[]),
            Err(InjectError::NotCallable { .. })
        ));
        assert!(matches!(
            obj.invoke("missing", &[]),
            Err(InjectError::NotCallable { .. })
        ));
    }
}
