pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;
pub mod operations;

pub use error::{PolynavError, Result};
pub use geometry::{Polygon, Winding};
pub use graph::{NavGraph, NavNode, NodeId};
pub use operations::{
    can_see_each_other, find_visible_points, triangle_edge_list, visibility_graph, Triangle,
    Triangulate, VisibilityPair,
};
