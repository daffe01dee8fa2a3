use crate::collections::{DirectedGraph, HeapOrder};
use crate::errors::Result;
use super::{TraversalEngine, dijkstra::accumulated_cost};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// From start Node, traverse through graph until the goal node is expanded
/// The Approach has 1 requirement for optimal paths:
/// the heuristic function must be admissible (never overestimates the true cost to reach the goal)
pub fn a_star<N, C, H>(graph: &DirectedGraph<N, C>, start: &N, goal: &N, heuristic_fn: H) -> Result<Option<Vec<N>>>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + PartialOrd + Copy + Debug,
    H: Fn(&N, &N) -> C, // heuristic from a node to the goal
    {
    engine(graph, heuristic_fn).find_path(start, goal)
}


/// Traversal engine set up as A*: min-first, g = weights so far, h = `heuristic_fn(node, goal)`
pub fn engine<'g, N, C, H>(graph: &'g DirectedGraph<N, C>, heuristic_fn: H) -> TraversalEngine<'g, N, C, C>
where
    N: Eq + Hash + Clone + Debug + 'g,
    C: Zero + PartialOrd + Copy + Debug + 'g,
    H: Fn(&N, &N) -> C + 'g,
    {
    TraversalEngine::new(graph, HeapOrder::Ascending)
        .with_g_function(accumulated_cost::<N, C>)
        .with_h_function(move |context| heuristic_fn(context.edge.to, context.end))
}
