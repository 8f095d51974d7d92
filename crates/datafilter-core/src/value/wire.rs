use crate::value::Value;
use serde::{Deserialize, Deserializer};

///
/// ValueWire
/// Serde decode shape for untyped JSON scalars.
///
/// Dates have no JSON type of their own and decode as text; sentinel tokens
/// are recognized and decode as sentinels.
///

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ValueWire {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ValueWire {
    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(v) => Value::Bool(v),
            Self::Int(v) => Value::Int(v),
            Self::Float(v) => Value::Float(v),
            Self::Text(v) => Value::from(v),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ValueWire::deserialize(deserializer).map(ValueWire::into_value)
    }
}
