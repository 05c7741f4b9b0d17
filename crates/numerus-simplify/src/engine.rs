//! The collapse engine.
//!
//! A [`Collapser`] lowers a tree into an e-graph, saturates it with the
//! rule set and lifts the cheapest equivalent term back into a fresh
//! [`Number`]. The input tree is never touched.

use std::time::Duration;

use egg::{Extractor, RecExpr, Rewrite, Runner};
use tracing::debug;

use numerus_expr::Number;

use crate::convert::{lift, lower};
use crate::cost::{AstSizeCost, OperationCost};
use crate::error::CollapseError;
use crate::language::NumerusLang;
use crate::rules;

/// Which cost function picks the extracted term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CostModel {
    /// Fewest nodes wins.
    #[default]
    AstSize,
    /// Cheapest to evaluate wins.
    Operation,
}

/// Configuration for the collapse engine.
#[derive(Clone, Debug)]
pub struct CollapseConfig {
    /// Maximum number of saturation iterations.
    pub iter_limit: usize,
    /// Maximum number of nodes in the e-graph.
    pub node_limit: usize,
    /// Wall-clock budget for one run.
    pub time_limit: Duration,
    /// Extraction cost function.
    pub cost: CostModel,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            iter_limit: 30,
            node_limit: 10_000,
            time_limit: Duration::from_secs(5),
            cost: CostModel::AstSize,
        }
    }
}

impl CollapseConfig {
    /// Sets the iteration limit.
    #[must_use]
    pub fn with_iter_limit(mut self, iter_limit: usize) -> Self {
        self.iter_limit = iter_limit;
        self
    }

    /// Sets the node limit.
    #[must_use]
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }

    /// Sets the time limit.
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the extraction cost function.
    #[must_use]
    pub fn with_cost(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }
}

/// Rewrites trees into cheaper equivalent trees.
#[derive(Clone)]
pub struct Collapser {
    config: CollapseConfig,
    rules: Vec<Rewrite<NumerusLang, ()>>,
}

impl Default for Collapser {
    fn default() -> Self {
        Self::new()
    }
}

impl Collapser {
    /// Creates a collapser with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CollapseConfig::default())
    }

    /// Creates a collapser with a custom configuration.
    #[must_use]
    pub fn with_config(config: CollapseConfig) -> Self {
        Self {
            config,
            rules: rules::all_rules(),
        }
    }

    /// Replaces the rule set.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Rewrite<NumerusLang, ()>>) -> Self {
        self.rules = rules;
        self
    }

    /// Adds rules to the existing set.
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rewrite<NumerusLang, ()>>) {
        self.rules.extend(rules);
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CollapseConfig {
        &self.config
    }

    /// Collapses a number.
    ///
    /// The result is a new tree; scalars come back unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`CollapseError`] if the extracted term cannot be rebuilt.
    pub fn collapse(&self, number: &Number) -> Result<Number, CollapseError> {
        self.collapse_with_stats(number).map(|(collapsed, _)| collapsed)
    }

    /// Collapses a number and reports how the run went.
    ///
    /// # Errors
    ///
    /// Returns a [`CollapseError`] if the extracted term cannot be rebuilt.
    pub fn collapse_with_stats(
        &self,
        number: &Number,
    ) -> Result<(Number, CollapseStats), CollapseError> {
        if !number.is_operation() {
            return Ok((number.clone(), CollapseStats::default()));
        }

        let expr = lower(number);
        let runner = Runner::default()
            .with_expr(&expr)
            .with_iter_limit(self.config.iter_limit)
            .with_node_limit(self.config.node_limit)
            .with_time_limit(self.config.time_limit)
            .run(&self.rules);

        let stats = CollapseStats {
            iterations: runner.iterations.len(),
            egraph_nodes: runner.egraph.total_number_of_nodes(),
            egraph_classes: runner.egraph.number_of_classes(),
            stop_reason: runner
                .stop_reason
                .as_ref()
                .map(|reason| format!("{reason:?}")),
        };

        let root = runner.roots[0];
        let best: RecExpr<NumerusLang> = match self.config.cost {
            CostModel::AstSize => Extractor::new(&runner.egraph, AstSizeCost).find_best(root).1,
            CostModel::Operation => {
                Extractor::new(&runner.egraph, OperationCost).find_best(root).1
            }
        };

        debug!(
            before = expr.as_ref().len(),
            after = best.as_ref().len(),
            iterations = stats.iterations,
            nodes = stats.egraph_nodes,
            stop_reason = stats.stop_reason.as_deref().unwrap_or("none"),
            "collapsed expression"
        );

        Ok((lift(&best)?, stats))
    }
}

/// Statistics about one collapse run.
#[derive(Clone, Debug, Default)]
pub struct CollapseStats {
    /// Number of saturation iterations run.
    pub iterations: usize,
    /// Total nodes in the e-graph.
    pub egraph_nodes: usize,
    /// Number of equivalence classes.
    pub egraph_classes: usize,
    /// Why the runner stopped, if it ran.
    pub stop_reason: Option<String>,
}

/// Collapsing with the default engine.
pub trait Collapse {
    /// Returns an equivalent, cheaper tree.
    ///
    /// # Errors
    ///
    /// See [`Collapser::collapse`].
    fn collapse(&self) -> Result<Number, CollapseError>;
}

impl Collapse for Number {
    fn collapse(&self) -> Result<Number, CollapseError> {
        Collapser::new().collapse(self)
    }
}
