use crate::error::{ClipError, PolygonRole, Result};
use crate::math::Point2;

/// A validated view of a simple closed polygon.
///
/// Edge `i` connects vertex `i` to vertex `(i + 1) % n`; the closing vertex
/// is never repeated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon<'a> {
    vertices: &'a [Point2],
}

impl<'a> Polygon<'a> {
    /// Checks `vertices` and borrows them as a polygon.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::InsufficientVertices` for fewer than 3 vertices and
    /// `ClipError::NonFinitePoint` if any coordinate is NaN or infinite.
    pub fn new(role: PolygonRole, vertices: &'a [Point2]) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(ClipError::InsufficientVertices {
                role,
                count: vertices.len(),
            });
        }
        if let Some(p) = vertices.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ClipError::NonFinitePoint { x: p.x, y: p.y });
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices in boundary order.
    #[must_use]
    pub fn vertices(&self) -> &'a [Point2] {
        self.vertices
    }

    /// Number of vertices (equal to the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a constructed polygon has at least 3 vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Iterates the closed edges of a vertex ring as `(start, end)` pairs.
pub fn edges_of(vertices: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
