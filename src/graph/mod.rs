pub mod node;

pub use node::{NavNode, NodeId};

use std::collections::HashSet;

use slotmap::{SecondaryMap, SlotMap};

/// An undirected, node-attributed graph used as a path-search substrate.
///
/// Nodes live in a generational arena and are addressed by opaque
/// [`NodeId`] handles; the adjacency table is keyed by the same ids, so
/// every registered node has an adjacency entry and vice versa. Edges are
/// undirected: adjacency is kept symmetric by construction.
///
/// Operations on absent nodes are deliberate no-ops rather than errors
/// (reported only through the boolean return of [`Self::remove_node`]), so
/// bulk construction from partially-built input never aborts midway.
#[derive(Debug)]
pub struct NavGraph<T> {
    nodes: SlotMap<NodeId, NavNode<T>>,
    adjacency: SecondaryMap<NodeId, HashSet<NodeId>>,
}

impl<T> Default for NavGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NavGraph<T> {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            adjacency: SecondaryMap::new(),
        }
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Returns the node behind `id`, or `None` if it was never added or has
    /// been removed.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NavNode<T>> {
        self.nodes.get(id)
    }

    /// Mutable access to the node behind `id`; the path-search collaborator
    /// uses this to update the g/h/f/parent scratch fields.
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NavNode<T>> {
        self.nodes.get_mut(id)
    }

    /// Adds an undirected edge between two registered nodes.
    ///
    /// A no-op when either id is absent; a one-sided edge is never created.
    /// Idempotent: neighbour sets are unordered-unique, so adding the same
    /// edge twice leaves the adjacency unchanged.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            return;
        }
        if let Some(set) = self.adjacency.get_mut(a) {
            set.insert(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.insert(a);
        }
    }

    /// Returns `true` if an edge connects `a` and `b`.
    #[must_use]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(&b))
    }

    /// Current neighbours of `id`.
    ///
    /// Empty for an isolated node and for an id that is absent (never an
    /// error): stale handles from removed nodes degrade to "no neighbours".
    #[must_use]
    pub fn neighbours(&self, id: NodeId) -> Vec<NodeId> {
        self.adjacency
            .get(id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Removes a node, detaching it from every neighbour's adjacency set
    /// before dropping its own adjacency entry and registry entry.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        if let Some(neighbours) = self.adjacency.remove(id) {
            for neighbour in neighbours {
                if let Some(set) = self.adjacency.get_mut(neighbour) {
                    set.remove(&id);
                }
            }
        }
        self.nodes.remove(id);
        true
    }

    /// Rezeroes every node's search scratch fields so the graph can serve
    /// another search.
    pub fn clear_search(&mut self) {
        for node in self.nodes.values_mut() {
            node.g = 0.0;
            node.h = 0.0;
            node.f = 0.0;
            node.parent = None;
        }
    }
}

impl<T: PartialEq> NavGraph<T> {
    /// Returns the id of the node wrapping a payload equal to `data`.
    #[must_use]
    pub fn lookup(&self, data: &T) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.data == *data)
            .map(|(id, _)| id)
    }

    /// Get-or-create by payload.
    ///
    /// The graph keeps a one-to-one mapping from payload to node: adding a
    /// payload that is already registered returns the existing id with its
    /// scratch fields untouched. A new node starts with `g = h = f = 0` and
    /// no parent.
    pub fn add_node(&mut self, data: T) -> NodeId {
        if let Some(id) = self.lookup(&data) {
            return id;
        }
        let id = self.nodes.insert(NavNode::new(data));
        self.adjacency.insert(id, HashSet::new());
        id
    }

    /// Builds a graph from a list of payload pairs, creating nodes on
    /// demand and wiring an undirected edge for each pair.
    ///
    /// This is how a visibility-pair list or a triangulation's shared-edge
    /// set is projected onto a navigation graph.
    #[must_use]
    pub fn from_edge_list(pairs: impl IntoIterator<Item = (T, T)>) -> Self {
        let mut graph = Self::new();
        for (a, b) in pairs {
            let a = graph.add_node(a);
            let b = graph.add_node(b);
            graph.add_edge(a, b);
        }
        graph
    }
}
