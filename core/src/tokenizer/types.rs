use serde::Serialize;

pub const NOT_A_FUNCTION: &str = "Not a function";
pub const UNTERMINATED_PARAMETER_LIST: &str = "Unterminated parameter list";

/// **EXTRACTION RESULT**
///
/// Failures are reported here rather than raised; callers decide whether an
/// unparseable signature matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub names: Vec<String>,
    pub success: bool,
    pub message: Option<String>,
}

impl Extraction {
    pub fn succeeded(names: Vec<String>) -> Self {
        Self {
            names,
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            names: Vec::new(),
            success: false,
            message: Some(message.into()),
        }
    }

    /// True when there is at least one name a detour could inject into.
    pub fn is_injectable(&self) -> bool {
        self.success && !self.names.is_empty()
    }
}
