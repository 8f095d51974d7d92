use crate::{
    filter::expression::{Expression, Predicate},
    value::Value,
};
use datafilter_primitives::{ComparisonOperator, LogicalOperator};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeStruct,
};

///
/// Wire shape
///
/// predicate:   {"type": <operator>, "dataField": <field>, "value": <value>}
/// conjunction: {"type": "and", "predicates": [...]}
/// disjunction: {"type": "or", "predicates": [...]}
///

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Predicate", 3)?;
        state.serialize_field("type", self.operator().token())?;
        state.serialize_field("dataField", self.field())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Predicate(predicate) => predicate.serialize(serializer),
            Self::Conjunction(children) | Self::Disjunction(children) => {
                let connective = self.connective().map_or("", LogicalOperator::token);
                let mut state = serializer.serialize_struct("Filterable", 2)?;
                state.serialize_field("type", connective)?;
                state.serialize_field("predicates", children)?;
                state.end()
            }
        }
    }
}

///
/// ExpressionWire
/// Serde decode shape; validated into `Expression` after decoding.
///

#[derive(Deserialize)]
struct ExpressionWire {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "dataField", default)]
    data_field: Option<String>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    predicates: Vec<Self>,
}

impl ExpressionWire {
    fn into_expression(self) -> Result<Expression, String> {
        if let Some(connective) = LogicalOperator::from_token(&self.kind) {
            let children = self
                .predicates
                .into_iter()
                .map(Self::into_expression)
                .collect::<Result<Vec<_>, _>>()?;

            return Ok(Expression::junction(connective, children));
        }

        let Some(operator) = ComparisonOperator::from_token(&self.kind) else {
            return Err(format!("unknown expression type '{}'", self.kind));
        };
        let Some(field) = self.data_field else {
            return Err(format!("predicate '{operator}' is missing dataField"));
        };

        Ok(Expression::Predicate(Predicate::new(
            field,
            operator,
            self.value.unwrap_or(Value::Null),
        )))
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ExpressionWire::deserialize(deserializer)?
            .into_expression()
            .map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Expression::deserialize(deserializer)? {
            Expression::Predicate(predicate) => Ok(predicate),
            other => Err(D::Error::custom(format!(
                "expected a predicate, found a '{}' node",
                other.connective().map_or("", LogicalOperator::token)
            ))),
        }
    }
}
