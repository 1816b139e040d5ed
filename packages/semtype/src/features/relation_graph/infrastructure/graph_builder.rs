//! Relation graph with petgraph
//!
//! Vertices are the synthetic root plus every base and derivative type.
//! Edges are root → base (in base order) and the relations each type
//! declares (in declaration order). Construction fails on any cycle.
//!
//! petgraph iterates out-edges newest-first, so the declaration order the
//! resolver relies on is kept in a separate per-vertex child list.

use super::cycle_detection::find_cycle;
use crate::errors::{CyclicRelationsError, Result, SemtypeError};
use crate::features::relation_graph::domain::{GraphNode, Relation, TypeRef};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::{HashMap, VecDeque};
use std::fmt::Write as _;

/// Immutable type relation DAG
pub struct RelationGraph {
    /// parent → child edges
    graph: DiGraph<GraphNode, Relation>,

    /// Synthetic root vertex
    root: NodeIndex,

    /// Type name → vertex
    name_to_node: HashMap<String, NodeIndex>,

    /// Out-edges per vertex, in declaration order
    children: Vec<Vec<(NodeIndex, EdgeIndex)>>,

    base: Vec<TypeRef>,
    derivative: Vec<TypeRef>,
}

impl RelationGraph {
    /// Build the graph from base and derivative types.
    ///
    /// Relations toward types outside the catalogue are skipped. Fails with
    /// [`SemtypeError::DuplicateType`] on a name clash (including the reserved
    /// root name) and [`SemtypeError::CyclicRelations`] on any cycle.
    pub fn build(base: Vec<TypeRef>, derivative: Vec<TypeRef>) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut name_to_node = HashMap::new();

        let root = graph.add_node(GraphNode::Root);

        // Add all types as nodes
        for node in base.iter().chain(derivative.iter()) {
            let name = node.name().to_string();
            if name == GraphNode::ROOT_NAME || name_to_node.contains_key(&name) {
                return Err(SemtypeError::DuplicateType(name));
            }
            let idx = graph.add_node(GraphNode::Type(node.clone()));
            name_to_node.insert(name, idx);
        }

        let mut children: Vec<Vec<(NodeIndex, EdgeIndex)>> = vec![Vec::new(); graph.node_count()];

        // Root is the universal superset: every base type sits directly below it
        for node in &base {
            let to_idx = name_to_node[node.name()];
            let edge = graph.add_edge(root, to_idx, Relation::root(node.clone()));
            children[root.index()].push((to_idx, edge));
        }

        // Declared relations; edges only if both ends are in the catalogue
        for node in base.iter().chain(derivative.iter()) {
            let from_idx = name_to_node[node.name()];

            for config in node.relations() {
                let Some(&to_idx) = name_to_node.get(&config.target) else {
                    tracing::debug!(
                        from = node.name(),
                        to = %config.target,
                        "skipping relation to type outside the typeset"
                    );
                    continue;
                };

                if graph.contains_edge(from_idx, to_idx) {
                    tracing::debug!(
                        from = node.name(),
                        to = %config.target,
                        "skipping duplicate relation"
                    );
                    continue;
                }

                let target = match &graph[to_idx] {
                    GraphNode::Type(t) => t.clone(),
                    GraphNode::Root => continue,
                };
                let edge = graph.add_edge(from_idx, to_idx, Relation::from_config(target, config));
                children[from_idx.index()].push((to_idx, edge));
            }
        }

        if let Some(cycle) = find_cycle(&graph) {
            let cycle: Vec<String> = cycle
                .into_iter()
                .map(|idx| graph[idx].name().to_string())
                .collect();
            tracing::warn!(cycle = ?cycle, "cyclic type relations");
            return Err(CyclicRelationsError { cycle }.into());
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            base = base.len(),
            derivative = derivative.len(),
            "relation graph built"
        );

        Ok(Self {
            graph,
            root,
            name_to_node,
            children,
            base,
            derivative,
        })
    }

    /// The synthetic root vertex
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Vertex weight
    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    /// Vertex of a type by name
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    /// Type by name
    pub fn get(&self, name: &str) -> Option<&TypeRef> {
        self.index_of(name).and_then(|idx| self.graph[idx].as_type())
    }

    /// Out-edges of a vertex in declaration order: (child, relation)
    pub fn children(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, &Relation)> + '_ {
        self.children
            .get(idx.index())
            .into_iter()
            .flatten()
            .map(move |&(child, edge)| (child, &self.graph[edge]))
    }

    /// Child type names of a vertex in declaration order
    pub fn child_names(&self, name: &str) -> Vec<&str> {
        let idx = if name == GraphNode::ROOT_NAME {
            Some(self.root)
        } else {
            self.index_of(name)
        };

        match idx {
            Some(idx) => self.children(idx).map(|(c, _)| self.graph[c].name()).collect(),
            None => Vec::new(),
        }
    }

    /// Relation between two types, if declared
    pub fn relation(&self, from: &str, to: &str) -> Option<&Relation> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;
        self.graph
            .find_edge(from_idx, to_idx)
            .map(|edge| &self.graph[edge])
    }

    /// True if `to` is reachable from `from` (a vertex reaches itself).
    ///
    /// The root name is accepted for `from`.
    pub fn is_reachable(&self, from: &str, to: &str) -> bool {
        let from_idx = if from == GraphNode::ROOT_NAME {
            Some(self.root)
        } else {
            self.index_of(from)
        };
        let to_idx = if to == GraphNode::ROOT_NAME {
            Some(self.root)
        } else {
            self.index_of(to)
        };

        match (from_idx, to_idx) {
            (Some(a), Some(b)) => has_path_connecting(&self.graph, a, b, None),
            _ => false,
        }
    }

    /// Shortest edge count from the root to a type
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        let target = self.index_of(name)?;
        let mut depth = vec![usize::MAX; self.graph.node_count()];
        let mut queue = VecDeque::from([self.root]);
        depth[self.root.index()] = 0;

        while let Some(current) = queue.pop_front() {
            if current == target {
                return Some(depth[current.index()]);
            }
            for (child, _) in self.children(current) {
                if depth[child.index()] == usize::MAX {
                    depth[child.index()] = depth[current.index()] + 1;
                    queue.push_back(child);
                }
            }
        }

        None
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Base types in declaration order
    pub fn base_types(&self) -> &[TypeRef] {
        &self.base
    }

    /// Derivative types in declaration order
    pub fn derivative_types(&self) -> &[TypeRef] {
        &self.derivative
    }

    /// All types: base first, then derivative
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        self.base.iter().chain(self.derivative.iter())
    }

    /// Graphviz rendering; detection-only relations are dashed
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph relations {\n");
        for idx in self.graph.node_indices() {
            let _ = writeln!(out, "    \"{}\";", self.graph[idx].name());
        }
        for idx in self.graph.node_indices() {
            for (child, relation) in self.children(idx) {
                let style = if relation.is_inferential() {
                    ""
                } else {
                    " [style=dashed]"
                };
                let _ = writeln!(
                    out,
                    "    \"{}\" -> \"{}\"{};",
                    self.graph[idx].name(),
                    self.graph[child].name(),
                    style
                );
            }
        }
        out.push('}');
        out
    }
}

impl std::fmt::Debug for RelationGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationGraph")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field(
                "base",
                &self.base.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
