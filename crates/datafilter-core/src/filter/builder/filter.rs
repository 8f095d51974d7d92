use crate::filter::{
    expression::Expression,
    ir::{Ir, Token},
    pipeline::parse,
};
use datafilter_primitives::LogicalOperator;

///
/// Filter
///
/// Accumulates predicates into a binary-nested array form.
/// Each step places the incoming predicate before the existing filter.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    filters: Option<Ir>,
}

impl Filter {
    #[must_use]
    pub const fn new() -> Self {
        Self { filters: None }
    }

    /// Wrap an existing array form.
    #[must_use]
    pub fn of(filters: impl Into<Option<Ir>>) -> Self {
        Self {
            filters: filters.into(),
        }
    }

    #[must_use]
    pub fn and(mut self, predicate: impl Into<Option<Ir>>) -> Self {
        self.filters = combine(predicate.into(), LogicalOperator::And, self.filters.take());
        self
    }

    #[must_use]
    pub fn or(mut self, predicate: impl Into<Option<Ir>>) -> Self {
        self.filters = combine(predicate.into(), LogicalOperator::Or, self.filters.take());
        self
    }

    #[must_use]
    pub const fn filters(&self) -> Option<&Ir> {
        self.filters.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filters.is_none()
    }

    /// Run the parsing pipeline over the accumulated form.
    /// An empty filter has no tree.
    #[must_use]
    pub fn to_filterable(&self) -> Option<Expression> {
        self.filters.clone().map(parse)
    }

    #[must_use]
    pub fn into_ir(self) -> Option<Ir> {
        self.filters
    }
}

impl From<Ir> for Filter {
    fn from(ir: Ir) -> Self {
        Self::of(ir)
    }
}

fn combine(incoming: Option<Ir>, op: LogicalOperator, existing: Option<Ir>) -> Option<Ir> {
    match (incoming, existing) {
        (Some(incoming), Some(existing)) => Some(Ir::List(vec![
            incoming,
            Ir::Token(Token::Logical(op)),
            existing,
        ])),
        (incoming, existing) => incoming.or(existing),
    }
}
