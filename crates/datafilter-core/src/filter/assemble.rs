use crate::filter::{expression::Expression, ir::Token, materialize::Materialized};
use datafilter_primitives::LogicalOperator;

///
/// Build the typed tree from a materialized array form.
///
/// Each level becomes one node. A level holding any `and` token is a
/// conjunction, otherwise it is a disjunction; mixed connectives inside one
/// flat level are not preserved. Nested lists become child nodes and
/// predicates are appended in encounter order. Tokens only pick the node
/// variant and stray values are ignored.
///
#[must_use]
pub fn assemble(materialized: Materialized) -> Expression {
    match materialized {
        Materialized::List(items) => assemble_level(items),
        Materialized::Predicate(predicate) => {
            Expression::Disjunction(vec![Expression::Predicate(predicate)])
        }
        Materialized::Token(_) | Materialized::Value(_) => Expression::Disjunction(Vec::new()),
    }
}

fn assemble_level(items: Vec<Materialized>) -> Expression {
    let connective = level_connective(&items);
    let mut children = Vec::with_capacity(items.len().div_ceil(2));

    for item in items {
        match item {
            Materialized::List(nested) => children.push(assemble_level(nested)),
            Materialized::Predicate(predicate) => children.push(Expression::Predicate(predicate)),
            Materialized::Token(_) | Materialized::Value(_) => {}
        }
    }

    Expression::junction(connective, children)
}

fn level_connective(items: &[Materialized]) -> LogicalOperator {
    let has_and = items
        .iter()
        .any(|item| matches!(item, Materialized::Token(Token::Logical(LogicalOperator::And))));

    if has_and {
        LogicalOperator::And
    } else {
        LogicalOperator::Or
    }
}

///
/// TESTS
///
