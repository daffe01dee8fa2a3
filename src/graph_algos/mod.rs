pub mod traversal;
pub mod dijkstra;
pub mod a_star;
mod shortest_path;

pub use traversal::{CostFn, SearchContext, SearchNode, TraversalEngine};

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Type alias for the closed set kept by the traversal engine
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// Entries are in expansion order; a `SearchNode`'s parent is the position
/// of the parent's entry in this map, so the map doubles as the search tree
pub(crate) type ClosedSet<N, C> = FxIndexMap<N, SearchNode<N, C>>;
