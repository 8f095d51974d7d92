use super::*;

#[test]
fn comparison_negation_is_involutive() {
    for op in ALL_COMPARISON_OPERATORS {
        assert_ne!(op.negate(), op, "{op} must not negate to itself");
        assert_eq!(op.negate().negate(), op);
    }
}

#[test]
fn comparison_negation_pairs_match_table() {
    assert_eq!(ComparisonOperator::Eq.negate(), ComparisonOperator::Ne);
    assert_eq!(ComparisonOperator::Gt.negate(), ComparisonOperator::Lte);
    assert_eq!(ComparisonOperator::Gte.negate(), ComparisonOperator::Lt);
    assert_eq!(
        ComparisonOperator::Contains.negate(),
        ComparisonOperator::NotContains
    );
    assert_eq!(
        ComparisonOperator::IsBlank.negate(),
        ComparisonOperator::IsNotBlank
    );
}

#[test]
fn tokens_parse_back_to_the_same_operator() {
    for op in ALL_COMPARISON_OPERATORS {
        assert_eq!(op.token().parse::<ComparisonOperator>(), Ok(op));
    }
}

#[test]
fn unknown_token_is_rejected_with_the_token() {
    let err = "~=".parse::<ComparisonOperator>().unwrap_err();
    assert_eq!(err.token, "~=");
    assert_eq!(err.to_string(), "'~=' is not a valid comparison operator");
}

#[test]
fn only_blank_checks_are_null_checks() {
    let null_checks: Vec<_> = ALL_COMPARISON_OPERATORS
        .into_iter()
        .filter(|op| op.is_null_check())
        .collect();

    assert_eq!(
        null_checks,
        vec![ComparisonOperator::IsBlank, ComparisonOperator::IsNotBlank]
    );
}

#[test]
fn logical_operators_swap() {
    assert_eq!(LogicalOperator::And.negate(), LogicalOperator::Or);
    assert_eq!(LogicalOperator::Or.negate_if(false), LogicalOperator::Or);
    assert_eq!(LogicalOperator::from_token("and"), Some(LogicalOperator::And));
    assert_eq!(LogicalOperator::from_token("AND"), None);
}

#[test]
fn null_sentinels_swap_and_now_is_fixed() {
    assert_eq!(Sentinel::Null.negate(), Sentinel::NotNull);
    assert_eq!(Sentinel::NotNull.negate(), Sentinel::Null);
    assert_eq!(Sentinel::Now.negate(), Sentinel::Now);
    assert_eq!(Sentinel::from_token("@notnull"), Some(Sentinel::NotNull));
}
