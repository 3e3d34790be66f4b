use thiserror::Error;

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("DUPLICATE DEPENDENCY: '{name}' already registered in namespace '{namespace}'")]
    DuplicateDependency { namespace: String, name: String },

    #[error("NAMESPACE NOT FOUND: namespace '{namespace}' has no registered container")]
    NamespaceNotFound { namespace: String },

    #[error("NOT CALLABLE: '{name}' is not a function")]
    NotCallable { name: String },

    #[error("CIRCULAR DEPENDENCY: {chain}")]
    CircularDependency { chain: String },

    #[error("RESOLUTION DEPTH EXCEEDED: limit {limit} reached while resolving '{name}'")]
    ResolutionDepthExceeded { name: String, limit: usize },

    #[error("CONFIGURATION ERROR: {code} - {message}")]
    Configuration { code: String, message: String },

    #[error("INVOCATION ERROR: {code} - {message}")]
    Invocation { code: String, message: String },
}

impl InjectError {
    /// **INVOCATION FAILURE** - For producers and callbacks that fail on their own terms
    pub fn invocation(message: impl Into<String>) -> Self {
        InjectError::Invocation {
            code: error_codes::INVOCATION_FAILED.to_string(),
            message: message.into(),
        }
    }

    /// **STABLE ERROR CODE**
    pub fn code(&self) -> &str {
        match self {
            InjectError::DuplicateDependency { .. } => error_codes::DUPLICATE_DEPENDENCY,
            InjectError::NamespaceNotFound { .. } => error_codes::NAMESPACE_NOT_FOUND,
            InjectError::NotCallable { .. } => error_codes::NOT_CALLABLE,
            InjectError::CircularDependency { .. } => error_codes::CIRCULAR_DEPENDENCY,
            InjectError::ResolutionDepthExceeded { .. } => error_codes::RESOLUTION_DEPTH_EXCEEDED,
            InjectError::Configuration { code, .. } | InjectError::Invocation { code, .. } => code.as_str(),
        }
    }
}

/// **INJECTION ERROR CODES**
///
/// **MANDATE**: Use these standardized error codes for consistent error reporting.
pub mod error_codes {
    pub const DUPLICATE_DEPENDENCY: &str = "RUST_CORE_INJECTION_DUPLICATE_DEPENDENCY";
    pub const NAMESPACE_NOT_FOUND: &str = "RUST_CORE_INJECTION_NAMESPACE_NOT_FOUND";
    pub const NOT_CALLABLE: &str = "RUST_CORE_INJECTION_NOT_CALLABLE";
    pub const CIRCULAR_DEPENDENCY: &str = "RUST_CORE_INJECTION_CIRCULAR_DEPENDENCY";
    pub const RESOLUTION_DEPTH_EXCEEDED: &str = "RUST_CORE_INJECTION_RESOLUTION_DEPTH_EXCEEDED";
    pub const INVALID_CONFIG: &str = "RUST_CORE_INJECTION_INVALID_CONFIG";
    pub const INVOCATION_FAILED: &str = "RUST_CORE_INJECTION_INVOCATION_FAILED";
}
