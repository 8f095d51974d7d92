use crate::{
    filter::ir::{Ir, Token},
    value::Value,
};

///
/// Normalize the array form into a negation-free, canonical form.
///
/// Two passes, both order-preserving:
/// - raw nulls become the null sentinel
/// - negation markers are pushed down to the leaves (De Morgan)
///
/// The result is logically equivalent to the input and contains no
/// `Token::Not` and no `Value::Null`.
///
#[must_use]
pub fn normalize(ir: Ir) -> Ir {
    push_down_negation(canonicalize_nulls(ir))
}

///
/// Replace every raw null with the null sentinel.
///
/// Purely structural; operators are not interpreted.
///
#[must_use]
pub fn canonicalize_nulls(ir: Ir) -> Ir {
    match ir {
        Ir::Value(value) => Ir::Value(value.canonicalize_null()),
        Ir::List(items) => Ir::List(items.into_iter().map(canonicalize_nulls).collect()),
        Ir::Token(token) => Ir::Token(token),
    }
}

///
/// Push negation down to the leaves.
///
/// Each list is walked with an `inverse` flag received by value from its
/// parent. A `!` flips the flag for the rest of its list and is dropped
/// from the output. While the flag is set, comparison operators, logical
/// operators and null sentinels are replaced by their partners.
///
/// Sibling lists each start from the flag as it stood when they were
/// reached, so negations never leak across siblings.
///
/// Nested negations cancel: each `!` toggles the flag, so `!!P` is `P`.
///
#[must_use]
pub fn push_down_negation(ir: Ir) -> Ir {
    match ir {
        Ir::List(items) => Ir::List(push_down_list(items, false)),
        // a bare marker negates nothing
        Ir::Token(Token::Not) => Ir::List(Vec::new()),
        other => other,
    }
}

fn push_down_list(items: Vec<Ir>, mut inverse: bool) -> Vec<Ir> {
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        match item {
            Ir::Token(Token::Not) => inverse = !inverse,
            Ir::Token(token) => out.push(Ir::Token(token.negate_if(inverse))),
            Ir::Value(value @ Value::Sentinel(_)) => out.push(Ir::Value(value.negate_if(inverse))),
            Ir::Value(value) => out.push(Ir::Value(value)),
            Ir::List(children) => out.push(Ir::List(push_down_list(children, inverse))),
        }
    }

    out
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::builder::{conjoin, disjoin, eq, gt, isblank, negate};
    use datafilter_primitives::{ComparisonOperator, LogicalOperator, Sentinel};

    fn or() -> Ir {
        Ir::Token(Token::Logical(LogicalOperator::Or))
    }

    fn and() -> Ir {
        Ir::Token(Token::Logical(LogicalOperator::And))
    }

    #[test]
    fn nulls_become_sentinels_at_any_depth() {
        let ir = Ir::List(vec![
            Ir::Value(Value::Null),
            Ir::List(vec![Ir::List(vec![Ir::Value(Value::Null)])]),
        ]);

        assert_eq!(
            canonicalize_nulls(ir),
            Ir::List(vec![
                Ir::Value(Value::Sentinel(Sentinel::Null)),
                Ir::List(vec![Ir::List(vec![Ir::Value(Value::Sentinel(
                    Sentinel::Null
                ))])]),
            ])
        );
    }

    #[test]
    fn un_negated_input_is_unchanged() {
        let ir = conjoin([eq("a", 1), disjoin([gt("b", 2), eq("c", "x")])]).unwrap();

        assert_eq!(normalize(ir.clone()), ir);
    }

    #[test]
    fn negated_comparison_flips_operator() {
        let ir = negate(eq("a", 1)).unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![Ir::List(vec![Ir::triple(
                "a",
                ComparisonOperator::Ne,
                1
            )])])
        );
    }

    #[test]
    fn de_morgan_flips_connective_and_operands() {
        let ir = negate(conjoin([eq("a", 1), gt("b", 2)])).unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![Ir::List(vec![
                Ir::List(vec![Ir::triple("a", ComparisonOperator::Ne, 1)]),
                or(),
                Ir::List(vec![Ir::triple("b", ComparisonOperator::Lte, 2)]),
            ])])
        );
    }

    #[test]
    fn double_negation_cancels() {
        let ir = negate(negate(gt("a", 1))).unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![Ir::List(vec![Ir::List(vec![Ir::triple(
                "a",
                ComparisonOperator::Gt,
                1
            )])])])
        );
    }

    #[test]
    fn sibling_negations_are_independent() {
        let ir = conjoin([negate(eq("a", 1)), eq("b", 2), negate(disjoin([eq("c", 3), eq("d", 4)]))])
            .unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![
                Ir::List(vec![Ir::List(vec![Ir::triple("a", ComparisonOperator::Ne, 1)])]),
                and(),
                Ir::List(vec![Ir::triple("b", ComparisonOperator::Eq, 2)]),
                and(),
                Ir::List(vec![Ir::List(vec![
                    Ir::List(vec![Ir::triple("c", ComparisonOperator::Ne, 3)]),
                    and(),
                    Ir::List(vec![Ir::triple("d", ComparisonOperator::Ne, 4)]),
                ])]),
            ])
        );
    }

    #[test]
    fn negated_blank_check_swaps_operator_and_sentinel() {
        let ir = negate(isblank("f")).unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![Ir::List(vec![Ir::triple(
                "f",
                ComparisonOperator::Ne,
                Sentinel::NotNull
            )])])
        );
    }

    #[test]
    fn negated_raw_null_is_canonicalized_before_pushdown() {
        let ir = negate(eq("f", vec![Value::Null])).unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![Ir::List(vec![Ir::triple(
                "f",
                ComparisonOperator::Ne,
                Sentinel::NotNull
            )])])
        );
    }

    #[test]
    fn sentinel_text_is_swapped_under_negation() {
        let ir = negate(eq("f", "@null")).unwrap();

        assert_eq!(
            normalize(ir),
            Ir::List(vec![Ir::List(vec![Ir::triple(
                "f",
                ComparisonOperator::Ne,
                Sentinel::NotNull
            )])])
        );
    }

    #[test]
    fn builder_and_raw_json_normalize_alike() {
        let built = normalize(negate(eq("f", "@null")).unwrap());
        let raw = normalize(Ir::from_json_str(r#"["!", [["f", "=", "@null"]]]"#).unwrap());

        assert_eq!(built, raw);
    }

    #[test]
    fn normalization_is_idempotent() {
        let ir = negate(conjoin([negate(eq("a", 1)), isblank("b")])).unwrap();
        let once = normalize(ir);

        assert_eq!(normalize(once.clone()), once);
    }
}
