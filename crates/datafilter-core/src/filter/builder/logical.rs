use crate::filter::ir::{Ir, Token};
use datafilter_primitives::LogicalOperator;

/// Wrap an expression as `["!", expr]`. Absence stays absent.
#[must_use]
pub fn negate(expr: impl Into<Option<Ir>>) -> Option<Ir> {
    expr.into()
        .map(|expr| Ir::List(vec![Ir::Token(Token::Not), expr]))
}

/// Join expressions with `and`.
///
/// Absent arguments are dropped first. Then: none left → `None`,
/// one left → that expression unchanged, otherwise one alternating list.
#[must_use]
pub fn conjoin<I>(exprs: I) -> Option<Ir>
where
    I: IntoIterator,
    I::Item: Into<Option<Ir>>,
{
    join(LogicalOperator::And, exprs)
}

/// Join expressions with `or`, under the same arity rules as `conjoin`.
#[must_use]
pub fn disjoin<I>(exprs: I) -> Option<Ir>
where
    I: IntoIterator,
    I::Item: Into<Option<Ir>>,
{
    join(LogicalOperator::Or, exprs)
}

fn join<I>(op: LogicalOperator, exprs: I) -> Option<Ir>
where
    I: IntoIterator,
    I::Item: Into<Option<Ir>>,
{
    let mut present: Vec<Ir> = exprs.into_iter().filter_map(Into::into).collect();

    match present.len() {
        0 => None,
        1 => present.pop(),
        len => {
            let mut items = Vec::with_capacity(len * 2 - 1);
            for (index, expr) in present.into_iter().enumerate() {
                if index > 0 {
                    items.push(Ir::Token(Token::Logical(op)));
                }
                items.push(expr);
            }

            Some(Ir::List(items))
        }
    }
}
