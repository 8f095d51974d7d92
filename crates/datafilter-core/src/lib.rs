//! Core of datafilter: the value model, the array-form builders, the
//! negation-pushdown normalizer, and the pipeline that assembles a typed
//! filter tree for transport.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod filter;
pub mod payload;
pub mod value;

///
/// Prelude
///
/// Builders and tree vocabulary only.
/// Configuration, payload envelopes and errors are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        filter::{
            Expression, Filter, Ir, Predicate, conjoin, contains, disjoin, eq, ge, gt, isblank,
            isnotblank, le, lt, ne, negate, notcontains, parse,
        },
        value::Value,
    };
    pub use datafilter_primitives::{ComparisonOperator, LogicalOperator, Sentinel};
}
