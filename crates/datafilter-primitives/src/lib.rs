//! Closed operator and sentinel vocabularies shared by the filter layers.
//!
//! Every table here is a `const` generated from one registry, so lookups are
//! read-only and need no synchronization.
#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Negation marker token in the array form of a filter.
pub const NOT_TOKEN: &str = "!";

///
/// InvalidOperatorError
///
/// Raised when a comparison is requested with a token outside the fixed
/// operator set. Carries the rejected token verbatim.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("'{token}' is not a valid comparison operator")]
pub struct InvalidOperatorError {
    pub token: String,
}

impl InvalidOperatorError {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

///
/// ComparisonOperator
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    NotContains,
    IsBlank,
    IsNotBlank,
}

impl ComparisonOperator {
    /// Wire token for this operator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        comparison_operator_registry!(token_from_registry, self)
    }

    /// Logical negation partner. The table is involutive.
    #[must_use]
    pub const fn negate(self) -> Self {
        comparison_operator_registry!(negation_from_registry, self)
    }

    /// Return the partner when `inverse` is set, else `self`.
    #[must_use]
    pub const fn negate_if(self, inverse: bool) -> Self {
        if inverse { self.negate() } else { self }
    }

    /// Whether this operator tests for null and takes no value operand.
    #[must_use]
    pub const fn is_null_check(self) -> bool {
        comparison_operator_registry!(null_check_from_registry, self)
    }

    /// Look up an operator by its wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        comparison_operator_registry!(parse_from_registry, token)
    }
}

impl FromStr for ComparisonOperator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| InvalidOperatorError::new(s))
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Ordered list of all comparison operators in registry order.
pub const ALL_COMPARISON_OPERATORS: [ComparisonOperator; 10] =
    comparison_operator_registry!(all_operators_from_registry);

///
/// LogicalOperator
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// De Morgan partner.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::And => Self::Or,
            Self::Or => Self::And,
        }
    }

    #[must_use]
    pub const fn negate_if(self, inverse: bool) -> Self {
        if inverse { self.negate() } else { self }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

///
/// Sentinel
///
/// Non-literal comparison targets, transmitted as their token.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sentinel {
    Now,
    Null,
    NotNull,
}

impl Sentinel {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Now => "@now",
            Self::Null => "@null",
            Self::NotNull => "@notnull",
        }
    }

    /// Null and not-null swap; `Now` has no partner.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Now => Self::Now,
            Self::Null => Self::NotNull,
            Self::NotNull => Self::Null,
        }
    }

    #[must_use]
    pub const fn negate_if(self, inverse: bool) -> Self {
        if inverse { self.negate() } else { self }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "@now" => Some(Self::Now),
            "@null" => Some(Self::Null),
            "@notnull" => Some(Self::NotNull),
            _ => None,
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
