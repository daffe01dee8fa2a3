use thiserror::Error;


/// Failures raised by graph construction and path search
/// "No path" is not one of them - searches report it as `Ok(None)`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String), // Self-loop, or a query on a node the graph doesn't hold

    #[error("node {0} already exists in the graph")]
    DuplicateNode(String),

    #[error("edge {from} -> {to} already exists in the graph")]
    DuplicateEdge { from: String, to: String },

    #[error("node {0} is not in the graph")]
    NodeNotFound(String), // Search endpoint missing from the graph
}

pub type Result<T> = std::result::Result<T, GraphError>;
