use super::ClosedSet;

/// Construct the path from the start node to the node stored at `goal_index`
/// Follows parent indices back to the root, then reverses
/// closed: ClosedSet<N, C> - expanded nodes with their parent index
/// goal_index: usize - index of the goal node in the closed set
pub(crate) fn shortest_path<N, C>(closed: &ClosedSet<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current_index {
        let Some((node, search_node)) = closed.get_index(index) else {
            break;
        };
        path.push(node.clone());
        current_index = search_node.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
