use std::fmt;

pub const PARAMETER_NOT_FOUND: &str = "ParameterNotFound";
pub const PARAMETER_VERSION_NOT_FOUND: &str = "ParameterVersionNotFound";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    pub name: Option<String>,
    /// Version or label suffix, including its leading `:`.
    pub selector: Option<String>,
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            selector: None,
            value: Some(value.into()),
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Key under which a batch result is reported: name followed by the
    /// selector whenever one was echoed back, even an empty one.
    pub fn result_key(&self) -> String {
        let mut key = self.name.clone().unwrap_or_default();
        if let Some(selector) = &self.selector {
            key.push_str(selector);
        }
        key
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetParametersOutput {
    pub parameters: Vec<Parameter>,
    pub invalid_parameters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Error reported by the service, tagged with its error code.
    Service { code: String, message: String },
    /// Transport, credential or client failure with no service error code.
    Unknown(String),
}

impl StoreError {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code.as_str()),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Service { code, .. }
                if code == PARAMETER_NOT_FOUND || code == PARAMETER_VERSION_NOT_FOUND
        )
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service { code, message } => write!(f, "{}: {}", code, message),
            Self::Unknown(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only access to a parameter store. Both calls decrypt secure strings.
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn get_parameter(&self, name: &str) -> Result<Parameter, StoreError>;

    async fn get_parameters(&self, names: &[String]) -> Result<GetParametersOutput, StoreError>;
}
