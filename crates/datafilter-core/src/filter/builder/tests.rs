use super::*;
use crate::{
    filter::ir::{Ir, Token},
    value::Value,
};
use datafilter_primitives::{ComparisonOperator, LogicalOperator, Sentinel};

fn or() -> Ir {
    Ir::Token(Token::Logical(LogicalOperator::Or))
}

fn and() -> Ir {
    Ir::Token(Token::Logical(LogicalOperator::And))
}

#[test]
fn compare_builds_fields_major_cartesian_product() {
    let ir = compare(["a", "b"], ComparisonOperator::Eq, [1, 2]).unwrap();

    assert_eq!(
        ir,
        Ir::List(vec![
            Ir::triple("a", ComparisonOperator::Eq, 1),
            or(),
            Ir::triple("a", ComparisonOperator::Eq, 2),
            or(),
            Ir::triple("b", ComparisonOperator::Eq, 1),
            or(),
            Ir::triple("b", ComparisonOperator::Eq, 2),
        ])
    );
    assert_eq!(ir.triple_count(), 4);
    assert!(!ir.has_logical(LogicalOperator::And));
}

#[test]
fn single_pair_is_still_wrapped_in_a_list() {
    assert_eq!(
        eq("name", "ice"),
        Some(Ir::List(vec![Ir::triple("name", ComparisonOperator::Eq, "ice")]))
    );
}

#[test]
fn wrappers_fix_their_operator() {
    let cases = [
        (ne("f", 1), ComparisonOperator::Ne),
        (gt("f", 1), ComparisonOperator::Gt),
        (ge("f", 1), ComparisonOperator::Gte),
        (lt("f", 1), ComparisonOperator::Lt),
        (le("f", 1), ComparisonOperator::Lte),
        (contains("f", "x"), ComparisonOperator::Contains),
        (notcontains("f", "x"), ComparisonOperator::NotContains),
    ];

    for (ir, expected) in cases {
        let ir = ir.unwrap();
        let (_, op, _) = ir.as_list().unwrap()[0].as_triple().unwrap();
        assert_eq!(op, expected);
    }
}

#[test]
fn missing_values_contribute_nothing() {
    assert_eq!(eq("a", Values::none()), None);
    assert_eq!(gt("a", None::<i64>), None);
    assert_eq!(contains("a", Vec::<String>::new()), None);
}

#[test]
fn lone_null_value_contributes_nothing() {
    assert_eq!(eq("f", Value::Null), None);
    assert_eq!(ne("f", Some(Value::Null)), None);
    assert_eq!(gt("f", None::<Value>), None);
}

#[test]
fn nulls_inside_a_list_are_kept() {
    assert_eq!(
        eq("f", vec![Value::Null]),
        Some(Ir::List(vec![Ir::triple("f", ComparisonOperator::Eq, Value::Null)]))
    );
}

#[test]
fn blank_checks_compare_against_null_sentinel() {
    assert_eq!(
        isblank("f"),
        Some(Ir::List(vec![Ir::triple(
            "f",
            ComparisonOperator::Eq,
            Sentinel::Null
        )]))
    );
    assert_eq!(
        isnotblank(["a", "b"]),
        Some(Ir::List(vec![
            Ir::triple("a", ComparisonOperator::Ne, Sentinel::Null),
            or(),
            Ir::triple("b", ComparisonOperator::Ne, Sentinel::Null),
        ]))
    );
}

#[test]
fn null_check_operators_ignore_values() {
    assert_eq!(
        compare("f", ComparisonOperator::IsBlank, [1, 2, 3]),
        isblank("f")
    );
}

#[test]
fn compare_token_rejects_unknown_operator() {
    let err = compare_token("a", "~=", 1).unwrap_err();
    assert_eq!(err.token, "~=");

    let err = compare_token("a", "LIKE", Values::none()).unwrap_err();
    assert_eq!(err.token, "LIKE");
}

#[test]
fn compare_token_accepts_every_wire_token() {
    assert_eq!(compare_token("a", ">=", 3).unwrap(), ge("a", 3));
    assert_eq!(compare_token("a", "isnotblank", Values::none()).unwrap(), isnotblank("a"));
    assert_eq!(compare_token("a", "=", Values::none()).unwrap(), None);
}

#[test]
fn values_accept_mixed_literal_kinds() {
    let ir = eq("f", vec![Value::Int(1), Value::from("x"), Value::Null]).unwrap();
    assert_eq!(ir.triple_count(), 3);
}

#[test]
fn negate_wraps_with_marker() {
    let inner = eq("a", 1).unwrap();

    assert_eq!(
        negate(inner.clone()),
        Some(Ir::List(vec![Ir::Token(Token::Not), inner]))
    );
    assert_eq!(negate(None::<Ir>), None);
}

#[test]
fn combinators_follow_arity_rules() {
    let a = eq("a", 1);
    let b = eq("b", 2);

    assert_eq!(conjoin(Vec::<Ir>::new()), None);
    assert_eq!(conjoin([a.clone()]), a);
    assert_eq!(disjoin([None, b.clone(), None]), b);
    assert_eq!(
        conjoin([a.clone(), b.clone(), a.clone()]),
        Some(Ir::List(vec![
            a.clone().unwrap(),
            and(),
            b.clone().unwrap(),
            and(),
            a.clone().unwrap(),
        ]))
    );
    assert_eq!(
        disjoin([a.clone(), b.clone()]),
        Some(Ir::List(vec![a.unwrap(), or(), b.unwrap()]))
    );
}

#[test]
fn fluent_filter_prepends_incoming_predicate() {
    let filter = Filter::new().and(eq("a", 1)).or(eq("b", 2));

    assert_eq!(
        filter.filters(),
        Some(&Ir::List(vec![eq("b", 2).unwrap(), or(), eq("a", 1).unwrap()]))
    );
}

#[test]
fn fluent_filter_skips_absent_predicates() {
    let filter = Filter::of(eq("a", 1)).and(None::<Ir>).or(gt("b", None::<i64>));

    assert_eq!(filter.into_ir(), eq("a", 1));
}

#[test]
fn empty_filter_has_no_tree() {
    let filter = Filter::new();

    assert!(filter.is_empty());
    assert_eq!(filter.to_filterable(), None);
}
