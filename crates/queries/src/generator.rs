//! Weighted selection of request generators.

use crate::{error::QueryResult, QueryError, RpcMethod, State};
use std::{borrow::Cow, fmt, str::FromStr};
use tracing::{debug, trace, warn};

/// Renders a single newline terminated JSON-RPC request from the given state.
pub type Generator = fn(&dyn State) -> String;

/// A request generator registered with a relative weight.
#[derive(Clone)]
pub struct RandomQuery {
    method: Cow<'static, str>,
    weight: i64,
    generate: Generator,
}

impl RandomQuery {
    /// Creates a query from an arbitrary generator.
    pub fn new(method: impl Into<Cow<'static, str>>, weight: i64, generate: Generator) -> Self {
        Self { method: method.into(), weight, generate }
    }

    /// Creates a query for one of the supported methods.
    pub fn from_method(method: RpcMethod, weight: i64) -> Self {
        Self::new(method.as_str(), weight, method.generator())
    }

    /// Returns the name the query was registered under.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the relative weight of the query.
    pub const fn weight(&self) -> i64 {
        self.weight
    }

    /// Renders a request.
    pub fn generate(&self, state: &dyn State) -> String {
        (self.generate)(state)
    }
}

impl fmt::Debug for RandomQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomQuery")
            .field("method", &self.method)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Picks request generators proportionally to their weights.
///
/// Built once during startup; afterwards [`QueriesGenerator::query`] only needs a shared
/// reference and can be called from any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct QueriesGenerator {
    /// Registered queries, heaviest first.
    queries: Vec<RandomQuery>,
    /// Sum of all registered weights.
    total_weight: i64,
}

impl QueriesGenerator {
    /// Builds a generator from a `method name -> weight` table.
    ///
    /// Entries with a zero weight are disabled and skipped. Any other entry must name a
    /// supported [`RpcMethod`], otherwise the whole table is rejected.
    ///
    /// Negative weights are accepted but skew sampling; they are a configuration error.
    pub fn from_weights<I, K>(weights: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut generator = Self::default();
        for (name, weight) in weights {
            let name = name.as_ref();
            if weight == 0 {
                continue
            }

            let method = RpcMethod::from_str(name)
                .map_err(|_| QueryError::UnsupportedMethod(name.to_string()))?;
            generator.add(RandomQuery::from_method(method, weight))?;
        }

        debug!(
            target: "ethspam::queries",
            queries = generator.len(),
            total_weight = generator.total_weight,
            "Built queries generator"
        );
        Ok(generator)
    }

    /// Registers a query, keeping the heaviest queries first.
    ///
    /// Queries with equal weights keep their registration order. Fails without registering the
    /// query if the total weight would no longer fit in an `i64`.
    pub fn add(&mut self, query: RandomQuery) -> QueryResult<()> {
        if query.weight < 0 {
            warn!(target: "ethspam::queries", method = %query.method, weight = query.weight, "Registering query with negative weight");
        }
        debug!(target: "ethspam::queries", method = %query.method, weight = query.weight, "Registering query");

        self.total_weight = self
            .total_weight
            .checked_add(query.weight)
            .ok_or_else(|| QueryError::WeightOverflow(query.method.to_string()))?;

        let idx = self.queries.partition_point(|q| q.weight >= query.weight);
        self.queries.insert(idx, query);
        Ok(())
    }

    /// Picks a query proportionally to its weight and renders a request with it.
    ///
    /// # Panics
    ///
    /// If the weight walk ends without a match, which requires negative weights.
    pub fn query(&self, state: &dyn State) -> QueryResult<String> {
        let query = self.pick(state.rand_i64())?;
        trace!(target: "ethspam::queries", method = %query.method, "Generating query");
        Ok(query.generate(state))
    }

    /// Maps a random draw onto the query it selects.
    ///
    /// The magnitude of the draw is reduced into `[0, total_weight)` and the query whose
    /// cumulative weight range contains it is returned.
    pub fn pick(&self, draw: i64) -> QueryResult<&RandomQuery> {
        if self.queries.is_empty() {
            return Err(QueryError::NoGenerators)
        }

        let target = if self.total_weight > 0 {
            (draw.unsigned_abs() % self.total_weight as u64) as i64
        } else {
            0
        };

        // partial sums may leave the i64 range when negative weights offset the total
        let mut current = 0i64;
        for query in &self.queries {
            current = current.saturating_add(query.weight);
            if target < current {
                return Ok(query)
            }
        }

        unreachable!("off by one bug in weighted query selection")
    }

    /// Returns the registered queries, heaviest first.
    pub fn queries(&self) -> &[RandomQuery] {
        &self.queries
    }

    /// Returns the sum of all registered weights.
    pub const fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Returns the number of registered queries.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Returns `true` if no query is registered.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Returns the probability of the given method being picked, if it is registered.
    pub fn probability(&self, method: &str) -> Option<f64> {
        let query = self.queries.iter().find(|q| q.method == method)?;
        Some(query.weight as f64 / self.total_weight as f64)
    }
}
