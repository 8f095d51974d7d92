use crate::{
    filter::ir::{Ir, Token},
    value::Value,
};
use datafilter_primitives::{
    ComparisonOperator, InvalidOperatorError, LogicalOperator, Sentinel,
};
use derive_more::{Deref, IntoIterator};
use time::{Date, OffsetDateTime};
use tracing::trace;

///
/// Fields
/// one field name or an ordered list of them
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct Fields(Vec<String>);

impl From<&str> for Fields {
    fn from(field: &str) -> Self {
        Self(vec![field.to_string()])
    }
}

impl From<String> for Fields {
    fn from(field: String) -> Self {
        Self(vec![field])
    }
}

impl From<Vec<&str>> for Fields {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Fields {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<&[&str]> for Fields {
    fn from(fields: &[&str]) -> Self {
        Self(fields.iter().map(|field| (*field).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(fields: [&str; N]) -> Self {
        Self(fields.into_iter().map(str::to_string).collect())
    }
}

///
/// Values
/// one value, an ordered list, or nothing at all
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
pub struct Values(Vec<Value>);

impl Values {
    /// No values; only null checks contribute a comparison.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }
}

impl From<Vec<Value>> for Values {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

macro_rules! impl_values_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Values {
                fn from(value: $ty) -> Self {
                    Self(vec![Value::from(value)])
                }
            }

            impl From<Option<$ty>> for Values {
                fn from(value: Option<$ty>) -> Self {
                    Self(value.into_iter().map(Value::from).collect())
                }
            }

            impl From<Vec<$ty>> for Values {
                fn from(values: Vec<$ty>) -> Self {
                    Self(values.into_iter().map(Value::from).collect())
                }
            }

            impl<const N: usize> From<[$ty; N]> for Values {
                fn from(values: [$ty; N]) -> Self {
                    Self(values.into_iter().map(Value::from).collect())
                }
            }
        )*
    };
}

impl_values_from!(
    &str,
    String,
    bool,
    i32,
    i64,
    u32,
    f64,
    OffsetDateTime,
    Date,
    Sentinel,
);

// A lone null is "no values", like `None`; nulls inside a list are kept.
impl From<Value> for Values {
    fn from(value: Value) -> Self {
        if value.is_null() {
            Self::none()
        } else {
            Self(vec![value])
        }
    }
}

impl From<Option<Value>> for Values {
    fn from(value: Option<Value>) -> Self {
        value.map_or_else(Self::none, Self::from)
    }
}

///
/// COMPARISON BUILDERS
///

/// OR-combination of `field op value` over every field × value pair.
///
/// Returns `None` when no values are given and `op` is not a null check;
/// that is absence, not an error. Null checks ignore `values` and compare
/// every field against the null sentinel.
#[must_use]
pub fn compare(
    fields: impl Into<Fields>,
    op: ComparisonOperator,
    values: impl Into<Values>,
) -> Option<Ir> {
    let fields = fields.into();

    match op {
        ComparisonOperator::IsBlank => Some(null_check(&fields, ComparisonOperator::Eq)),
        ComparisonOperator::IsNotBlank => Some(null_check(&fields, ComparisonOperator::Ne)),
        _ => {
            let values = values.into();
            if values.is_empty() {
                trace!(operator = %op, fields = ?fields.as_slice(), "no values; comparison contributes nothing");
                return None;
            }

            Some(product(&fields, op, &values))
        }
    }
}

/// Low-level entry point taking the operator as its wire token.
///
/// The token is checked before anything is built.
pub fn compare_token(
    fields: impl Into<Fields>,
    token: &str,
    values: impl Into<Values>,
) -> Result<Option<Ir>, InvalidOperatorError> {
    let op = token.parse::<ComparisonOperator>()?;

    Ok(compare(fields, op, values))
}

/// Equal to.
#[must_use]
pub fn eq(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Eq, values)
}

/// Not equal to.
#[must_use]
pub fn ne(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Ne, values)
}

/// Greater than.
#[must_use]
pub fn gt(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Gt, values)
}

/// Greater than or equal to.
#[must_use]
pub fn ge(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Gte, values)
}

/// Less than.
#[must_use]
pub fn lt(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Lt, values)
}

/// Less than or equal to.
#[must_use]
pub fn le(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Lte, values)
}

/// Text containment.
#[must_use]
pub fn contains(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::Contains, values)
}

/// Negated text containment.
#[must_use]
pub fn notcontains(fields: impl Into<Fields>, values: impl Into<Values>) -> Option<Ir> {
    compare(fields, ComparisonOperator::NotContains, values)
}

/// Field equals the null sentinel.
#[must_use]
pub fn isblank(fields: impl Into<Fields>) -> Option<Ir> {
    compare(fields, ComparisonOperator::IsBlank, Values::none())
}

/// Field differs from the null sentinel.
#[must_use]
pub fn isnotblank(fields: impl Into<Fields>) -> Option<Ir> {
    compare(fields, ComparisonOperator::IsNotBlank, Values::none())
}

fn null_check(fields: &Fields, op: ComparisonOperator) -> Ir {
    product(fields, op, &[Value::Sentinel(Sentinel::Null)])
}

// Fields-major cartesian product joined by `or`, always wrapped in one list.
fn product(fields: &[String], op: ComparisonOperator, values: &[Value]) -> Ir {
    let mut items = Vec::with_capacity((fields.len() * values.len() * 2).saturating_sub(1));

    for field in fields {
        for value in values {
            if !items.is_empty() {
                items.push(Ir::Token(Token::Logical(LogicalOperator::Or)));
            }
            items.push(Ir::triple(field.as_str(), op, value.clone()));
        }
    }

    Ir::List(items)
}
