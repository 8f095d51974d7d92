//! ## Crate layout
//! - `core`: value model, builders, normalizer, pipeline, and payload envelopes.
//! - `primitives`: the closed operator and sentinel vocabularies.
//! - `error`: the public error taxonomy.
//!
//! The `prelude` module carries the builder surface used to write filters.

pub use datafilter_core as core;
pub use datafilter_primitives as primitives;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{
    config::FilterConfig,
    filter::{Expression, Filter, Ir, Pipeline, Predicate, parse, to_filterable},
    payload::{AggregateOperation, Aggregable, Aggregation, Payload, ResultPage},
    value::Value,
};
pub use error::{Error, ErrorKind, FilterErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::filter::{compare, compare_token, to_filterable};
}
