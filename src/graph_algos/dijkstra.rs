use crate::collections::{DirectedGraph, HeapOrder};
use crate::errors::Result;
use super::{SearchContext, TraversalEngine};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edge data is the edge's weight; Ok(None) when `goal` is unreachable
pub fn dijkstra<N, C>(graph: &DirectedGraph<N, C>, start: &N, goal: &N) -> Result<Option<Vec<N>>>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + PartialOrd + Copy + Debug,
    {
    engine(graph).find_path(start, goal)
}


/// Traversal engine set up as Dijkstra: min-first, g = weights so far, no heuristic
/// Reuse it across searches on the same graph to keep its buffers
pub fn engine<'g, N, C>(graph: &'g DirectedGraph<N, C>) -> TraversalEngine<'g, N, C, C>
where
    N: Eq + Hash + Clone + Debug + 'g,
    C: Zero + PartialOrd + Copy + Debug + 'g,
    {
    TraversalEngine::new(graph, HeapOrder::Ascending).with_g_function(accumulated_cost::<N, C>)
}


/// g-function: cost of the expanded node plus the weight of the edge being crossed
pub fn accumulated_cost<N, C>(context: &SearchContext<'_, N, C, C>) -> C
where
    C: Zero + Copy,
{
    context.expand_node.g_cost() + *context.edge.data
}
