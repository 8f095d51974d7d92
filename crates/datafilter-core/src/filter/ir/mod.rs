mod wire;


use crate::value::Value;
use datafilter_primitives::{ComparisonOperator, LogicalOperator, NOT_TOKEN};
use std::fmt;

///
/// Token
///
/// Structural tokens of the array form. Position gives them meaning:
/// a comparison operator at index 1 of a three-element list marks a triple,
/// a leading `Not` negates the rest of its list, logical operators join
/// the operands of a combination.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Not,
    Compare(ComparisonOperator),
    Logical(LogicalOperator),
}

impl Token {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Not => NOT_TOKEN,
            Self::Compare(op) => op.token(),
            Self::Logical(op) => op.token(),
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token == NOT_TOKEN {
            return Some(Self::Not);
        }

        ComparisonOperator::from_token(token)
            .map(Self::Compare)
            .or_else(|| LogicalOperator::from_token(token).map(Self::Logical))
    }

    /// Operator tokens swap with their partner under `inverse`.
    /// `Not` is structural and never rewritten here.
    #[must_use]
    pub const fn negate_if(self, inverse: bool) -> Self {
        match self {
            Self::Not => Self::Not,
            Self::Compare(op) => Self::Compare(op.negate_if(inverse)),
            Self::Logical(op) => Self::Logical(op.negate_if(inverse)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Ir
///
/// Untyped nested-array form produced by the builders. Nodes carry no
/// self-description beyond position.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Ir {
    Value(Value),
    Token(Token),
    List(Vec<Self>),
}

impl Ir {
    /// A single comparison triple `[field, op, value]`.
    #[must_use]
    pub fn triple(field: impl Into<String>, op: ComparisonOperator, value: impl Into<Value>) -> Self {
        Self::List(vec![
            Self::Value(Value::Text(field.into())),
            Self::Token(Token::Compare(op)),
            Self::Value(value.into()),
        ])
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the parts of a comparison triple, if this node is one.
    #[must_use]
    pub fn as_triple(&self) -> Option<(&Value, ComparisonOperator, &Value)> {
        match self.as_list()? {
            [Self::Value(field), Self::Token(Token::Compare(op)), Self::Value(value)] => {
                Some((field, *op, value))
            }
            _ => None,
        }
    }

    /// Whether one of this list's direct elements is the given logical token.
    #[must_use]
    pub fn has_logical(&self, op: LogicalOperator) -> bool {
        self.as_list().is_some_and(|items| {
            items
                .iter()
                .any(|item| *item == Self::Token(Token::Logical(op)))
        })
    }

    /// List nesting depth; scalars are depth 0.
    ///
    /// Walks with an explicit stack so hostile inputs can be measured
    /// before any recursive stage runs.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if let Self::List(items) = node {
                let depth = depth + 1;
                deepest = deepest.max(depth);
                stack.extend(items.iter().map(|item| (item, depth)));
            }
        }

        deepest
    }

    /// Number of comparison triples anywhere in the tree.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        if self.as_triple().is_some() {
            return 1;
        }

        self.as_list()
            .map_or(0, |items| items.iter().map(Self::triple_count).sum())
    }

    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Value> for Ir {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Token> for Ir {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<Vec<Self>> for Ir {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}
