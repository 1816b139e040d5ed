//! Greedy relation-graph resolver
//!
//! Walks from the root, one level at a time, taking the first child (in
//! declaration order) that matches. Never backtracks: a failed deeper match
//! leaves the shallower match as the answer.
//!
//! Each level is evaluated in two passes:
//! 1. Predicate pass (both modes): first child whose `contains` holds on the
//!    current column.
//! 2. Conversion pass (`Infer` only, and only if pass 1 found nothing): first
//!    inferential edge whose conversion succeeds and whose target accepts the
//!    converted column.
//!
//! Pass 1 never converts, so the `Detect` walk is a prefix of the `Infer` walk.
//! A later child whose predicate holds on the current column therefore wins
//! over an earlier child that would only match after conversion.
//!
//! A failed trial conversion never stops the level: the remaining siblings
//! are still tried. Malformed columns abort immediately. Under
//! [`ConversionPolicy::Strict`] a partial conversion is reported only once no
//! sibling at that level has matched.
//! Termination follows from the graph being acyclic.

use crate::config::ConversionPolicy;
use crate::errors::{ConversionError, Result};
use crate::features::relation_graph::{Relation, RelationGraph};
use crate::features::resolution::domain::{Resolution, ResolveMode};
use crate::features::resolution::ports::Resolver;
use crate::shared::models::Column;
use petgraph::graph::NodeIndex;
use std::borrow::Cow;

/// Resolver over a [`RelationGraph`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphResolver {
    policy: ConversionPolicy,
}

/// A step down one level: the child and, if crossing converted, the new column
type Step = Option<(NodeIndex, Option<Column>)>;

/// Outcome of one trial conversion
enum Crossing {
    Matched(Column),
    Rejected,
    /// Reported if no sibling matches
    Deferred(ConversionError),
}

impl GraphResolver {
    pub fn new(policy: ConversionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    fn step(
        &self,
        graph: &RelationGraph,
        current: NodeIndex,
        column: &Column,
        mode: ResolveMode,
    ) -> Result<Step> {
        for (child, _) in graph.children(current) {
            if graph.node(child).contains(column) {
                return Ok(Some((child, None)));
            }
        }

        if mode == ResolveMode::Detect {
            return Ok(None);
        }

        let mut deferred = None;
        for (child, relation) in graph.children(current) {
            if !relation.is_inferential() {
                continue;
            }
            match self.try_cross(relation, column)? {
                Crossing::Matched(candidate) => return Ok(Some((child, Some(candidate)))),
                Crossing::Rejected => {}
                Crossing::Deferred(err) => {
                    deferred.get_or_insert(err);
                }
            }
        }

        match deferred {
            Some(err) => {
                tracing::debug!(
                    column = %column.name,
                    error = %err,
                    "no sibling matched, conversion failure reported"
                );
                Err(err.into())
            }
            None => Ok(None),
        }
    }

    /// Convert across an inferential edge and test the target predicate.
    fn try_cross(&self, relation: &Relation, column: &Column) -> Result<Crossing> {
        let target = relation.target();

        let candidate = match relation.convert(column) {
            Ok(candidate) => candidate,
            Err(err) if err.is_hard() => {
                tracing::debug!(to = target.name(), error = %err, "conversion failed hard");
                return Err(err.into());
            }
            Err(err) if self.policy.propagates(&err) => {
                tracing::trace!(
                    to = target.name(),
                    error = %err,
                    "conversion failed, trying siblings"
                );
                return Ok(Crossing::Deferred(err));
            }
            Err(err) => {
                tracing::trace!(to = target.name(), error = %err, "conversion failed, edge skipped");
                return Ok(Crossing::Rejected);
            }
        };

        if candidate.len() != column.len() {
            return Err(ConversionError::malformed(
                target.name(),
                format!(
                    "converter returned {} rows for a column of {}",
                    candidate.len(),
                    column.len()
                ),
            )
            .into());
        }

        if target.contains(&candidate) {
            tracing::trace!(to = target.name(), column = %column.name, "converted across edge");
            Ok(Crossing::Matched(candidate))
        } else {
            tracing::trace!(to = target.name(), "converted column rejected by predicate");
            Ok(Crossing::Rejected)
        }
    }
}

impl Resolver for GraphResolver {
    fn resolve(
        &self,
        column: &Column,
        graph: &RelationGraph,
        mode: ResolveMode,
    ) -> Result<Resolution> {
        let mut current = graph.root();
        let mut state: Cow<'_, Column> = Cow::Borrowed(column);
        let mut path = Vec::new();
        let mut converted = false;

        while let Some((child, next_column)) = self.step(graph, current, &state, mode)? {
            current = child;
            path.push(graph.node(child).name().to_string());
            if let Some(next_column) = next_column {
                state = Cow::Owned(next_column);
                converted = true;
            }
        }

        tracing::trace!(
            column = %column.name,
            mode = mode.as_str(),
            resolved = graph.node(current).name(),
            "column resolved"
        );

        Ok(Resolution {
            node: graph.node(current).clone(),
            column: state.into_owned(),
            path,
            converted,
        })
    }
}
