use std::fmt;

use crate::store::repository::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    InvalidArgument(String),
    /// The parameter store answered with an error code.
    Backend {
        name: Option<String>,
        code: String,
        message: String,
    },
    /// The request failed before the parameter store could answer.
    Unknown {
        name: Option<String>,
        reason: String,
    },
    MissingValue(String),
}

impl LookupError {
    /// Tags a store failure with the parameter name it was raised for.
    /// Batch requests pass `None`.
    pub fn from_store(name: Option<&str>, err: StoreError) -> Self {
        let name = name.map(str::to_string);
        match err {
            StoreError::Service { code, message } => Self::Backend {
                name,
                code,
                message,
            },
            StoreError::Unknown(reason) => Self::Unknown { name, reason },
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::Backend {
                name: Some(name),
                code,
                ..
            } => write!(f, "ssmps({:?}) returned error: {}", name, code),
            Self::Backend {
                name: None,
                code,
                message,
            } => write!(f, "ssmps returned error: {} message: {}", code, message),
            Self::Unknown {
                name: Some(name),
                reason,
            } => write!(f, "ssmps({:?}) returned unknown error: {}", name, reason),
            Self::Unknown { name: None, reason } => {
                write!(f, "ssmps returned unknown error: {}", reason)
            }
            Self::MissingValue(name) => write!(f, "ssmps({:?}) returned no value", name),
        }
    }
}

impl std::error::Error for LookupError {}
