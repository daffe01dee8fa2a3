//! Best-first graph search
//!
//! - [`DirectedGraph`]: nodes plus one-way weighted edges
//! - [`IndexedPriorityQueue`]: binary heap whose elements track their slot,
//!   so priorities can change in place
//! - [`TraversalEngine`]: one search loop driven by a g-function and an
//!   h-function; Dijkstra and A* are presets in [`graph_algos`]
//!
//! ```
//! use pathfind::{DirectedGraph, graph_algos::dijkstra};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge('A', 'B', 1.0).unwrap();
//! graph.add_edge('A', 'C', 4.0).unwrap();
//! graph.add_edge('B', 'C', 2.0).unwrap();
//!
//! let path = dijkstra::dijkstra(&graph, &'A', &'C').unwrap();
//! assert_eq!(path, Some(vec!['A', 'B', 'C']));
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;

pub use collections::{DirectedGraph, GraphEdge, HeapOrder, IndexedPriorityQueue, QueueItem};
pub use errors::{GraphError, Result};
pub use graph_algos::{SearchContext, SearchNode, TraversalEngine};
