pub mod directed_graph;
pub mod priority_queue;

pub use directed_graph::{DirectedGraph, GraphEdge};
pub use priority_queue::{HeapOrder, IndexedPriorityQueue, QueueItem};

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for insertion-ordered lookups and rustc_hash for fast hashing
/// Graph adjacency and the search closed set both rely on the stable positions
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
