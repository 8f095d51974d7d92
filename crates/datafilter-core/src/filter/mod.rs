//! Filter construction and the parsing pipeline.
//!
//! builders → array form → normalize → materialize → assemble → tree.

pub mod assemble;
pub mod builder;
pub mod expression;
pub mod ir;
pub mod materialize;
pub mod normalize;
pub mod pipeline;


pub use assemble::assemble;
pub use builder::{
    Fields, Filter, Values, compare, compare_token, conjoin, contains, disjoin, eq, ge, gt,
    isblank, isnotblank, le, lt, ne, negate, notcontains,
};
pub use expression::{Expression, Predicate};
pub use ir::{Ir, Token};
pub use materialize::{Materialized, materialize};
pub use normalize::{canonicalize_nulls, normalize, push_down_negation};
pub use pipeline::{Pipeline, parse, to_filterable};
