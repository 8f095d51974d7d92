use crate::{
    filter::{
        expression::Predicate,
        ir::{Ir, Token},
    },
    value::Value,
};

///
/// Materialized
///
/// Array form after comparison triples have been replaced by typed
/// predicates. Tokens and stray values are carried through untouched so the
/// assembler can read connectives off each level.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Materialized {
    Predicate(Predicate),
    Token(Token),
    Value(Value),
    List(Vec<Self>),
}

impl Materialized {
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Self::Predicate(predicate) => Some(predicate),
            _ => None,
        }
    }

    /// Number of predicates anywhere below this node.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        match self {
            Self::Predicate(_) => 1,
            Self::List(items) => items.iter().map(Self::predicate_count).sum(),
            Self::Token(_) | Self::Value(_) => 0,
        }
    }
}

///
/// Replace every comparison triple with a typed predicate.
///
/// A triple nested inside a list becomes a bare predicate in place. A bare
/// triple at the top is wrapped in a one-element list so the root is always
/// a level the assembler can read.
///
#[must_use]
pub fn materialize(ir: Ir) -> Materialized {
    match ir {
        Ir::List(items) => match into_predicate(items) {
            Ok(predicate) => Materialized::List(vec![Materialized::Predicate(predicate)]),
            Err(items) => Materialized::List(items.into_iter().map(materialize_node).collect()),
        },
        other => materialize_node(other),
    }
}

fn materialize_node(ir: Ir) -> Materialized {
    match ir {
        Ir::List(items) => match into_predicate(items) {
            Ok(predicate) => Materialized::Predicate(predicate),
            Err(items) => Materialized::List(items.into_iter().map(materialize_node).collect()),
        },
        Ir::Token(token) => Materialized::Token(token),
        Ir::Value(value) => Materialized::Value(value),
    }
}

// Hands the items back untouched when they do not form a triple.
fn into_predicate(items: Vec<Ir>) -> Result<Predicate, Vec<Ir>> {
    let is_triple = matches!(
        items.as_slice(),
        [Ir::Value(_), Ir::Token(Token::Compare(_)), Ir::Value(_)]
    );
    if !is_triple {
        return Err(items);
    }

    match <[Ir; 3]>::try_from(items) {
        Ok([Ir::Value(field), Ir::Token(Token::Compare(op)), Ir::Value(value)]) => {
            Ok(Predicate::new(field.into_field_name(), op, value))
        }
        Ok(items) => Err(items.into()),
        Err(items) => Err(items),
    }
}

///
/// TESTS
///
