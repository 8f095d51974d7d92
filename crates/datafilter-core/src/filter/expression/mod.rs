mod wire;


use crate::value::Value;
use datafilter_primitives::{ComparisonOperator, LogicalOperator};

///
/// Predicate
///
/// Leaf comparison. Immutable once built; the fields are only readable.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    field: String,
    operator: ComparisonOperator,
    value: Value,
}

impl Predicate {
    #[must_use]
    pub fn new(field: impl Into<String>, operator: ComparisonOperator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

///
/// Expression
///
/// Typed filter tree. The root handed to transport is always a
/// `Conjunction` or `Disjunction`; those are the filterable nodes.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Predicate(Predicate),
    Conjunction(Vec<Self>),
    Disjunction(Vec<Self>),
}

impl Expression {
    /// Build a filterable node for the given connective.
    #[must_use]
    pub const fn junction(connective: LogicalOperator, predicates: Vec<Self>) -> Self {
        match connective {
            LogicalOperator::And => Self::Conjunction(predicates),
            LogicalOperator::Or => Self::Disjunction(predicates),
        }
    }

    /// Implicit connective of a filterable node; `None` for a leaf.
    #[must_use]
    pub const fn connective(&self) -> Option<LogicalOperator> {
        match self {
            Self::Predicate(_) => None,
            Self::Conjunction(_) => Some(LogicalOperator::And),
            Self::Disjunction(_) => Some(LogicalOperator::Or),
        }
    }

    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }

    #[must_use]
    pub const fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Self::Predicate(predicate) => Some(predicate),
            _ => None,
        }
    }

    /// Ordered children of a filterable node; empty for a leaf.
    #[must_use]
    pub fn predicates(&self) -> &[Self] {
        match self {
            Self::Predicate(_) => &[],
            Self::Conjunction(children) | Self::Disjunction(children) => children,
        }
    }

    /// Every leaf predicate in encounter order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Predicate> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Predicate>) {
        match self {
            Self::Predicate(predicate) => out.push(predicate),
            Self::Conjunction(children) | Self::Disjunction(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Predicate(_) => 1,
            Self::Conjunction(children) | Self::Disjunction(children) => {
                children.iter().map(Self::leaf_count).sum()
            }
        }
    }

    /// Node depth; a lone leaf is depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .predicates()
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl From<Predicate> for Expression {
    fn from(predicate: Predicate) -> Self {
        Self::Predicate(predicate)
    }
}
