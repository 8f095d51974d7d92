use crate::{
    config::FilterConfig,
    error::FilterError,
    filter::{
        assemble::assemble, builder::Filter, expression::Expression, ir::Ir,
        materialize::materialize, normalize::normalize,
    },
};
use tracing::{debug, warn};

///
/// Run the four-stage pipeline over an array form.
///
/// normalize → materialize → assemble. No depth limit is applied; use a
/// configured [`Pipeline`] for untrusted input.
///
#[must_use]
pub fn parse(ir: Ir) -> Expression {
    assemble(materialize(normalize(ir)))
}

/// Pipeline over a fluent filter; an empty filter has no tree.
#[must_use]
pub fn to_filterable(filter: &Filter) -> Option<Expression> {
    filter.to_filterable()
}

///
/// Pipeline
///
/// Configured entry point. Measures nesting depth before any recursive
/// stage runs and optionally logs each intermediate stage.
///

#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    config: FilterConfig,
}

impl Pipeline {
    #[must_use]
    pub const fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn check_depth(&self, ir: &Ir) -> Result<usize, FilterError> {
        let depth = ir.depth();
        let limit = self.config.max_depth;
        if depth > limit {
            warn!(depth, limit, "filter rejected: nesting too deep");
            return Err(FilterError::DepthExceeded { depth, limit });
        }

        Ok(depth)
    }

    /// Run only the normalize stage, under the same depth limit as `parse`.
    pub fn normalize(&self, ir: Ir) -> Result<Ir, FilterError> {
        self.check_depth(&ir)?;

        Ok(normalize(ir))
    }

    pub fn parse(&self, ir: Ir) -> Result<Expression, FilterError> {
        let depth = self.check_depth(&ir)?;
        let triples = ir.triple_count();
        debug!(depth, triples, "parsing filter");

        let normalized = normalize(ir);
        if self.config.trace_stages {
            let json = normalized.to_json_string()?;
            debug!(stage = "normalize", ir = %json);
        }

        let materialized = materialize(normalized);
        if self.config.trace_stages {
            debug!(
                stage = "materialize",
                predicates = materialized.predicate_count(),
                ?materialized
            );
        }

        let expression = assemble(materialized);
        if self.config.trace_stages {
            let json = expression.to_json_string()?;
            debug!(stage = "assemble", tree = %json);
        }

        debug!(
            leaves = expression.leaf_count(),
            depth = expression.depth(),
            "filter parsed"
        );

        Ok(expression)
    }

    /// Decode a raw JSON array form and parse it.
    pub fn parse_json(&self, source: &str) -> Result<Expression, FilterError> {
        let ir = Ir::from_json_str(source)?;

        self.parse(ir)
    }
}

///
/// TESTS
///
