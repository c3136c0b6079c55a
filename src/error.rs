use thiserror::Error;

/// Top-level error type for the polynav toolkit.
#[derive(Debug, Error)]
pub enum PolynavError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has {count} vertices, at least {required} required")]
    TooFewVertices { count: usize, required: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to polygon triangulation.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("cannot triangulate a polygon with {0} distinct vertices")]
    TooFewVertices(usize),

    #[error("ear reduction stalled after emitting {emitted} of {expected} triangles")]
    Incomplete { emitted: usize, expected: usize },
}

/// Convenience type alias for results using [`PolynavError`].
pub type Result<T> = std::result::Result<T, PolynavError>;
