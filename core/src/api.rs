pub use crate::config::ResolverConfig;
pub use crate::dependencies::{Container, DependencyScope, Producer, Registry};
pub use crate::detour::create_detour;
pub use crate::errors::InjectError;
pub use crate::injector::Injector;
pub use crate::tokenizer::{extract_from_callable, extract_from_source, extract_parameter_names, Extraction};
pub use crate::types::{Callable, Object, Signature, Value};
