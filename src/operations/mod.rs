mod triangulate;
mod visibility;

pub use triangulate::{triangle_edge_list, Triangle, Triangulate};
pub use visibility::{can_see_each_other, find_visible_points, visibility_graph, VisibilityPair};
