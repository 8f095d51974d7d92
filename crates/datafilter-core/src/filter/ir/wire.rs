use crate::{
    filter::ir::{Ir, Token},
    value::ValueWire,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

///
/// IrWire
/// Serde decode shape for the raw nested-array form.
///
/// Strings that spell a token decode as that token, wherever they appear.
///

#[derive(Deserialize)]
#[serde(untagged)]
enum IrWire {
    List(Vec<Self>),
    Scalar(ValueWire),
}

impl IrWire {
    fn into_ir(self) -> Ir {
        match self {
            Self::List(items) => Ir::List(items.into_iter().map(Self::into_ir).collect()),
            Self::Scalar(ValueWire::Text(text)) => match Token::from_token(&text) {
                Some(token) => Ir::Token(token),
                None => Ir::Value(ValueWire::Text(text).into_value()),
            },
            Self::Scalar(scalar) => Ir::Value(scalar.into_value()),
        }
    }
}

impl<'de> Deserialize<'de> for Ir {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IrWire::deserialize(deserializer).map(IrWire::into_ir)
    }
}

impl Serialize for Ir {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Token(token) => serializer.serialize_str(token.as_str()),
            Self::List(items) => serializer.collect_seq(items),
        }
    }
}
