//! Request and response envelopes exchanged with a query endpoint.
//!
//! These carry no behavior beyond (de)serialization.
use crate::filter::expression::Expression;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Payload
///
/// Request body for a filtered, optionally aggregated, query.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<Expression>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregables: Option<Vec<Aggregable>>,
}

impl Payload {
    #[must_use]
    pub const fn new(filterable: Option<Expression>) -> Self {
        Self {
            filterable,
            aggregables: None,
        }
    }

    #[must_use]
    pub fn with_aggregable(mut self, aggregable: Aggregable) -> Self {
        self.aggregables.get_or_insert_with(Vec::new).push(aggregable);
        self
    }
}

///
/// AggregateOperation
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOperation {
    Count,
    Sum,
    Max,
    Min,
    Avg,
}

impl AggregateOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::Max => "max",
            Self::Min => "min",
            Self::Avg => "avg",
        }
    }
}

impl fmt::Display for AggregateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Aggregable
/// an aggregation requested over one column
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregable {
    pub data_field: String,
    pub operation: AggregateOperation,
}

impl Aggregable {
    #[must_use]
    pub fn new(data_field: impl Into<String>, operation: AggregateOperation) -> Self {
        Self {
            data_field: data_field.into(),
            operation,
        }
    }
}

///
/// Aggregation
/// an aggregation result returned by the endpoint
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    pub data_field: String,
    pub operation: AggregateOperation,
    pub result: f64,
}

///
/// ResultPage
///
/// Response envelope. The pagination shape belongs to the caller.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<P> {
    pub pagination: P,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<Aggregation>>,
}

impl<P> ResultPage<P> {
    /// Result for one column and operation, if the endpoint returned it.
    #[must_use]
    pub fn aggregation(&self, data_field: &str, operation: AggregateOperation) -> Option<f64> {
        self.aggregations
            .as_deref()?
            .iter()
            .find(|agg| agg.data_field == data_field && agg.operation == operation)
            .map(|agg| agg.result)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{builder::eq, pipeline::parse};
    use serde_json::json;

    #[test]
    fn payload_omits_absent_parts() {
        let payload = Payload::default();

        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({}));
    }

    #[test]
    fn payload_serializes_filter_and_aggregables() {
        let payload = Payload::new(Some(parse(eq("age", 30).unwrap())))
            .with_aggregable(Aggregable::new("salary", AggregateOperation::Avg));

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "filterable": {
                    "type": "or",
                    "predicates": [{ "type": "=", "dataField": "age", "value": 30 }]
                },
                "aggregables": [{ "dataField": "salary", "operation": "avg" }]
            })
        );
    }

    #[test]
    fn result_page_reads_aggregations() {
        let page: ResultPage<serde_json::Value> = serde_json::from_value(json!({
            "pagination": { "content": [], "totalElements": 0 },
            "aggregations": [
                { "dataField": "salary", "operation": "sum", "result": 1200.5 },
                { "dataField": "id", "operation": "count", "result": 3 }
            ]
        }))
        .unwrap();

        assert_eq!(page.aggregation("id", AggregateOperation::Count), Some(3.0));
        assert_eq!(page.aggregation("salary", AggregateOperation::Sum), Some(1200.5));
        assert_eq!(page.aggregation("salary", AggregateOperation::Max), None);
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let result: Result<Aggregable, _> =
            serde_json::from_value(json!({ "dataField": "x", "operation": "median" }));

        assert!(result.is_err());
    }
}
