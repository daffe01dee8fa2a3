use crate::errors::{GraphError, Result};
use super::FxIndexMap;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// Directed edge between two nodes carrying some data (usually its weight)
/// Out-edge iteration yields `GraphEdge<&N, &E>`, construction takes owned values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphEdge<N, E> {
    pub from: N,
    pub to: N,
    pub data: E,
}

impl<N, E> GraphEdge<N, E> {
    pub fn new(from: N, to: N, data: E) -> Self {
        Self { from, to, data }
    }
}


/// Graph with one-way edges, at most one edge per ordered pair of nodes
///
/// Nodes keep the order in which they were first referenced, either through
/// `add_node` or as an edge endpoint. Each node's out-edges are kept in
/// insertion order and iterated newest first, so the most recently added
/// edge is always expanded first by a search.
/// Nothing is ever removed.
#[derive(Clone, Debug)]
pub struct DirectedGraph<N, E> {
    adjacency: FxIndexMap<N, FxIndexMap<N, E>>, // from -> (to -> data)
    edge_count: usize,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<N, E> DirectedGraph<N, E>
where
    N: Eq + Hash + Clone + Debug,
{

    /// Empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph with room for `nodes` nodes before reallocating
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: FxIndexMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
        }
    }

    /// Build a graph from a list of edges, stopping at the first invalid one
    pub fn try_from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = GraphEdge<N, E>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_graph_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// False when either endpoint is missing
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.try_get_edge(from, to).is_some()
    }

    /// Data stored on the edge `from -> to`, if there is one
    pub fn try_get_edge(&self, from: &N, to: &N) -> Option<&E> {
        self.adjacency.get(from)?.get(to)
    }

    /// Add an isolated node
    pub fn add_node(&mut self, node: N) -> Result<()> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNode(format!("{node:?}")));
        }
        self.adjacency.insert(node, FxIndexMap::default());
        Ok(())
    }

    /// Add the edge `from -> to`, creating either endpoint if needed
    /// Fails on self-loops and on an ordered pair that already has an edge,
    /// in which case the graph is left untouched
    pub fn add_edge(&mut self, from: N, to: N, data: E) -> Result<()> {
        if from == to {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop on node {from:?} is not allowed"
            )));
        }
        if self.contains_edge(&from, &to) {
            return Err(GraphError::DuplicateEdge {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            });
        }

        // source first, so a brand new pair appears as `from` then `to`
        let source = self.adjacency.entry(from);
        let from_index = source.index();
        source.or_default();

        // destination must exist as a node even if it never gets an out-edge
        if !self.adjacency.contains_key(&to) {
            self.adjacency.insert(to.clone(), FxIndexMap::default());
        }
        self.adjacency[from_index].insert(to, data);
        self.edge_count += 1;

        Ok(())
    }

    pub fn add_graph_edge(&mut self, edge: GraphEdge<N, E>) -> Result<()> {
        self.add_edge(edge.from, edge.to, edge.data)
    }

    /// All nodes in order of first appearance
    /// Calling it again restarts from the first node
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Edges leaving `from`, most recently added first
    pub fn out_edges<'a>(&'a self, from: &'a N) -> Result<impl Iterator<Item = GraphEdge<&'a N, &'a E>>> {
        let targets = self.adjacency.get(from).ok_or_else(|| {
            GraphError::InvalidArgument(format!("graph doesn't contain node {from:?}"))
        })?;

        Ok(targets.iter().rev().map(move |(to, data)| GraphEdge::new(from, to, data)))
    }

    /// Total edge data along `path`
    /// None if two consecutive nodes aren't joined by an edge
    /// A single node (or empty path) weighs zero
    pub fn path_weight(&self, path: &[N]) -> Option<E>
    where
        E: Zero + Clone,
    {
        path.windows(2).try_fold(E::zero(), |total, pair| {
            self.try_get_edge(&pair[0], &pair[1]).map(|w| total + w.clone())
        })
    }
}
