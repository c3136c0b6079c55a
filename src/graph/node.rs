slotmap::new_key_type! {
    /// Unique identifier for a node in a navigation graph.
    pub struct NodeId;
}

/// A graph node: an arbitrary payload plus path-search scratch fields.
///
/// The scratch fields are owned by whatever search runs over the graph.
/// `f` is conventionally `g + h`, but maintaining that sum is the search
/// algorithm's responsibility, not the graph's.
#[derive(Debug, Clone)]
pub struct NavNode<T> {
    /// The wrapped payload.
    pub data: T,
    /// Cost accumulated from the start node.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
    /// Total cost estimate.
    pub f: f64,
    /// Back-reference for path reconstruction; `None` until a search sets it.
    pub parent: Option<NodeId>,
}

impl<T> NavNode<T> {
    /// Creates a node with zeroed scratch fields and no parent.
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: None,
        }
    }
}
