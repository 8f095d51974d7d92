use thiserror::Error as ThisError;

// re-exports
pub use datafilter_primitives::InvalidOperatorError;

///
/// FilterError
///
/// Boundary error for the configured pipeline and the wire codecs.
/// Builders on their own only ever fail with `InvalidOperatorError`.
///

#[derive(Debug, ThisError)]
pub enum FilterError {
    #[error(transparent)]
    InvalidOperator(#[from] InvalidOperatorError),

    #[error("filter nesting depth {depth} exceeds the configured limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },

    #[error("malformed filter wire data: {0}")]
    Wire(#[from] serde_json::Error),
}

impl FilterError {
    /// Return the rejected operator token, if this is an operator error.
    #[must_use]
    pub fn invalid_token(&self) -> Option<&str> {
        match self {
            Self::InvalidOperator(err) => Some(&err.token),
            Self::DepthExceeded { .. } | Self::Wire(_) => None,
        }
    }
}
