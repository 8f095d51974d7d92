mod wire;


use datafilter_primitives::Sentinel;
use serde::{Serialize, Serializer, ser::Error as _};
use std::fmt;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, format_description::FormatItem,
    macros::format_description,
};

// RFC 3339, millisecond precision, always UTC.
const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

pub(crate) use wire::ValueWire;

///
/// Value
/// the right-hand side of a comparison, or a field name in operand position
///
/// Null     → a raw null; the normalizer rewrites it to `Sentinel::Null`.
/// Sentinel → a non-literal target transmitted as its token.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(OffsetDateTime),
    Sentinel(Sentinel),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_sentinel(&self) -> Option<Sentinel> {
        match self {
            Self::Sentinel(sentinel) => Some(*sentinel),
            _ => None,
        }
    }

    /// Replace a raw null with the null sentinel.
    #[must_use]
    pub fn canonicalize_null(self) -> Self {
        match self {
            Self::Null => Self::Sentinel(Sentinel::Null),
            other => other,
        }
    }

    /// Swap null sentinels when `inverse` is set; every other value is kept.
    #[must_use]
    pub fn negate_if(self, inverse: bool) -> Self {
        match self {
            Self::Sentinel(sentinel) => Self::Sentinel(sentinel.negate_if(inverse)),
            other => other,
        }
    }

    /// Field name carried by this operand.
    /// Text is taken verbatim; other scalars use their display form.
    #[must_use]
    pub fn into_field_name(self) -> String {
        match self {
            Self::Text(text) => text,
            other => other.to_string(),
        }
    }

    fn date_token(date: &OffsetDateTime) -> Result<String, time::error::Format> {
        date.to_offset(UtcOffset::UTC).format(DATE_FORMAT)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => f.write_str(&Self::date_token(v).map_err(|_| fmt::Error)?),
            Self::Sentinel(v) => f.write_str(v.token()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Date(v) => serializer.serialize_str(&Self::date_token(v).map_err(S::Error::custom)?),
            Self::Sentinel(v) => serializer.serialize_str(v.token()),
        }
    }
}

///
/// CONVERSIONS
///

// Text spelling a sentinel token is that sentinel.
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Sentinel::from_token(value).map_or_else(|| Self::Text(value.to_string()), Self::Sentinel)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        match Sentinel::from_token(&value) {
            Some(sentinel) => Self::Sentinel(sentinel),
            None => Self::Text(value),
        }
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Self::Date(value)
    }
}

// Calendar dates are sent as midnight UTC.
impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Self::Date(PrimitiveDateTime::new(value, Time::MIDNIGHT).assume_utc())
    }
}

impl From<Sentinel> for Value {
    fn from(value: Sentinel) -> Self {
        Self::Sentinel(value)
    }
}
