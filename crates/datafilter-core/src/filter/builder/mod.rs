pub mod compare;
pub mod filter;
pub mod logical;

#[cfg(test)]
mod tests;

pub use compare::*;
pub use filter::Filter;
pub use logical::{conjoin, disjoin, negate};
