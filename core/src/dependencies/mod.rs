pub mod container;
pub mod registry;
pub mod types;

pub use container::{Container, WeakContainer};
pub use registry::Registry;
pub use types::{DependencyScope, Producer};
