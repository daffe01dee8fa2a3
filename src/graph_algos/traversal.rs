use crate::collections::{DirectedGraph, GraphEdge, HeapOrder, IndexedPriorityQueue, QueueItem};
use crate::errors::{GraphError, Result};
use super::{ClosedSet, shortest_path};

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::Hash,
};
use num_traits::Zero;
use tracing::{debug, trace, warn};


/// Node of the search tree built during one `find_path` call
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode<N, C> {
    value: N,
    pub(super) parent: Option<usize>, // index of the parent in the closed set, None for the root
    g_cost: C, // Cost to reach this node from the start
    h_cost: C, // Estimated cost from this node to the goal
    queue_index: Option<usize>, // Slot in the open queue, written by the queue only
}

impl<N, C> SearchNode<N, C>
where
    C: Zero + Copy,
{

    pub(crate) fn new(value: N, parent: Option<usize>, g_cost: C, h_cost: C) -> Self {
        Self {
            value,
            parent,
            g_cost,
            h_cost,
            queue_index: None,
        }
    }

    /// Graph node wrapped by this search node
    pub fn value(&self) -> &N {
        &self.value
    }

    pub fn g_cost(&self) -> C {
        self.g_cost
    }

    pub fn h_cost(&self) -> C {
        self.h_cost
    }

    /// Total cost = g + h aka the queue priority
    pub fn f_cost(&self) -> C {
        self.g_cost + self.h_cost
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<N, C> QueueItem for SearchNode<N, C>
where
    C: Zero + PartialOrd + Copy,
{
    // Incomparable costs (NaN) are treated as ties
    fn compare(&self, other: &Self) -> Ordering {
        self.f_cost().partial_cmp(&other.f_cost()).unwrap_or(Ordering::Equal)
    }

    fn queue_index(&self) -> Option<usize> {
        self.queue_index
    }

    fn set_queue_index(&mut self, index: Option<usize>) {
        self.queue_index = index;
    }
}


/// Everything a cost function may look at while an edge is evaluated
pub struct SearchContext<'a, N, E, C> {
    pub start: &'a N,
    pub end: &'a N,
    pub expand_node: &'a SearchNode<N, C>, // node being expanded
    pub edge: GraphEdge<&'a N, &'a E>, // out-edge of `expand_node` under consideration
    closed: &'a ClosedSet<N, C>,
}

impl<'a, N, E, C> SearchContext<'a, N, E, C> {

    /// Ancestors of the expanded node, nearest first, ending at the start node
    pub fn ancestors(&self) -> impl Iterator<Item = &'a SearchNode<N, C>> + use<'a, N, E, C> {
        let closed = self.closed;
        let parent_of = move |node: &SearchNode<N, C>| {
            node.parent.and_then(|index| closed.get_index(index)).map(|(_, parent)| parent)
        };
        std::iter::successors(parent_of(self.expand_node), move |node| parent_of(*node))
    }
}


/// Cost function slot of the engine
pub type CostFn<'g, N, E, C> = Box<dyn Fn(&SearchContext<'_, N, E, C>) -> C + 'g>;


/// Generalized best-first search over a `DirectedGraph`
///
/// The search order comes from two functions of the edge being evaluated:
/// - g-function: tentative cost from the start to the edge's destination
/// - h-function: estimated cost from the edge's destination to the goal
///
/// Both default to zero. With a zero heuristic the engine is Dijkstra /
/// uniform-cost search, with an admissible one it is A*. The engine trusts
/// the heuristic; admissibility is up to the caller.
///
/// The open queue and closed set are reused between calls, so one engine
/// runs one search at a time. The graph stays borrowed for the engine's
/// lifetime and cannot change under it.
pub struct TraversalEngine<'g, N, E, C> {
    graph: &'g DirectedGraph<N, E>,
    open: IndexedPriorityQueue<SearchNode<N, C>>,
    closed: ClosedSet<N, C>,
    g_function: CostFn<'g, N, E, C>,
    h_function: CostFn<'g, N, E, C>,
}

impl<'g, N, E, C> TraversalEngine<'g, N, E, C>
where
    N: Eq + Hash + Clone + Debug + 'g,
    E: 'g,
    C: Zero + PartialOrd + Copy + Debug + 'g,
{

    /// Engine over `graph`, popping nodes in `order` of f-cost
    /// The open queue is sized to the graph's node count
    pub fn new(graph: &'g DirectedGraph<N, E>, order: HeapOrder) -> Self {
        Self {
            graph,
            open: IndexedPriorityQueue::new(graph.node_count(), order),
            closed: ClosedSet::default(),
            g_function: Box::new(|_: &SearchContext<'_, N, E, C>| C::zero()),
            h_function: Box::new(|_: &SearchContext<'_, N, E, C>| C::zero()),
        }
    }

    pub fn graph(&self) -> &'g DirectedGraph<N, E> {
        self.graph
    }

    pub fn order(&self) -> HeapOrder {
        self.open.order()
    }

    pub fn set_g_function<F>(&mut self, g_function: F)
    where
        F: Fn(&SearchContext<'_, N, E, C>) -> C + 'g,
    {
        self.g_function = Box::new(g_function);
    }

    pub fn set_h_function<F>(&mut self, h_function: F)
    where
        F: Fn(&SearchContext<'_, N, E, C>) -> C + 'g,
    {
        self.h_function = Box::new(h_function);
    }

    pub fn with_g_function<F>(mut self, g_function: F) -> Self
    where
        F: Fn(&SearchContext<'_, N, E, C>) -> C + 'g,
    {
        self.set_g_function(g_function);
        self
    }

    pub fn with_h_function<F>(mut self, h_function: F) -> Self
    where
        F: Fn(&SearchContext<'_, N, E, C>) -> C + 'g,
    {
        self.set_h_function(h_function);
        self
    }

    /// Path from `start` to `end`, both included
    /// Ok(None) when `end` can't be reached from `start`
    pub fn find_path(&mut self, start: &N, end: &N) -> Result<Option<Vec<N>>> {
        Ok(self.find_path_with_cost(start, end)?.map(|(path, _)| path))
    }

    /// Like `find_path`, also returning the g-cost the search assigned to `end`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn find_path_with_cost(&mut self, start: &N, end: &N) -> Result<Option<(Vec<N>, C)>> {
        for node in [start, end] {
            if !self.graph.contains_node(node) {
                return Err(GraphError::NodeNotFound(format!("{node:?}")));
            }
        }

        let graph = self.graph;
        self.open.clear();
        self.closed.clear();

        // Seed the open queue with the start node
        if let Err(seed) = self.open.try_enqueue(SearchNode::new(start.clone(), None, C::zero(), C::zero())) {
            warn!(node = ?seed.value, capacity = self.open.capacity(), "open queue can't hold the start node");
            return Ok(None);
        }

        while let Some(expand) = self.open.try_dequeue() {
            // position the node will take in the closed set once expanded
            let expand_index = self.closed.len();
            trace!(node = ?expand.value, g = ?expand.g_cost, f = ?expand.f_cost(), open = self.open.len(), "expanding");

            if expand.value == *end {
                let cost = expand.g_cost;
                self.closed.insert(expand.value.clone(), expand);
                let path = shortest_path(&self.closed, expand_index);
                debug!(hops = path.len() - 1, cost = ?cost, expanded = self.closed.len(), "path found");
                return Ok(Some((path, cost)));
            }

            for edge in graph.out_edges(&expand.value)? {
                if self.closed.contains_key(edge.to) {
                    continue;
                }

                let context = SearchContext {
                    start,
                    end,
                    expand_node: &expand,
                    edge,
                    closed: &self.closed,
                };
                let g_cost = (self.g_function)(&context);

                let open_entry = self.open
                    .find(|node| node.value == *edge.to)
                    .map(|node| (node.queue_index, node.g_cost));
                trace!(from = ?edge.from, to = ?edge.to, g = ?g_cost, stored = ?open_entry.map(|(_, g)| g), "evaluating edge");

                match open_entry {
                    // First time we're seeing this node
                    None => {
                        let h_cost = (self.h_function)(&context);
                        let node = SearchNode::new(edge.to.clone(), Some(expand_index), g_cost, h_cost);
                        if let Err(rejected) = self.open.try_enqueue(node) {
                            warn!(node = ?rejected.value, capacity = self.open.capacity(), "open queue full, dropping node");
                        }
                    }
                    // Found a cheaper way to an open node
                    Some((Some(slot), stored)) if g_cost < stored => {
                        let h_cost = (self.h_function)(&context);
                        self.open.update(slot, |node| {
                            node.g_cost = g_cost;
                            node.h_cost = h_cost;
                            node.parent = Some(expand_index);
                        });
                    }
                    // The existing path is at least as good
                    _ => {}
                }
            }

            self.closed.insert(expand.value.clone(), expand);
        }

        debug!(expanded = self.closed.len(), "no path");
        Ok(None)
    }

    /// Nodes expanded by the most recent search, in expansion order
    pub fn explored(&self) -> impl Iterator<Item = (&N, &SearchNode<N, C>)> {
        self.closed.iter()
    }
}
