use thiserror::Error;

/// Which of the two input polygons an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonRole {
    Subject,
    Clip,
}

impl std::fmt::Display for PolygonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subject => f.write_str("subject"),
            Self::Clip => f.write_str("clip"),
        }
    }
}

/// Top-level error type for polygon construction and clipping sessions.
///
/// The clipping routine itself never fails; these errors come from
/// validated constructors and from the interactive [`Session`](crate::session::Session).
#[derive(Debug, Error, PartialEq)]
pub enum ClipError {
    #[error("{role} polygon needs at least 3 vertices, got {count}")]
    InsufficientVertices { role: PolygonRole, count: usize },

    #[error("non-finite point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("a clip result is being shown; reset the session before editing")]
    ResultPending,
}

/// Convenience type alias for results using [`ClipError`].
pub type Result<T> = std::result::Result<T, ClipError>;
