use datafilter_core::{
    config::ConfigError,
    error::{FilterError, InvalidOperatorError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<InvalidOperatorError> for Error {
    fn from(err: InvalidOperatorError) -> Self {
        Self::new(ErrorKind::Filter(FilterErrorKind::InvalidOperator), err.to_string())
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        let kind = match err {
            FilterError::InvalidOperator(_) => FilterErrorKind::InvalidOperator,
            FilterError::DepthExceeded { .. } => FilterErrorKind::TooDeep,
            FilterError::Wire(_) => FilterErrorKind::Malformed,
        };

        Self::new(ErrorKind::Filter(kind), err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, err.to_string())
    }
}

///
/// ErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Filter(FilterErrorKind),

    /// Configuration could not be read or parsed.
    Config,
}

///
/// FilterErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FilterErrorKind {
    /// An operator token outside the comparison set.
    InvalidOperator,

    /// Nesting deeper than the configured limit.
    TooDeep,

    /// Wire data that is not a filter.
    Malformed,
}
