use crate::geometry::polygon::edges_of;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// One crossing between a subject edge and a clip edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord {
    pub point: Point2,
    /// Index of the subject edge (from vertex `i` to `i + 1`).
    pub subject_edge: usize,
    /// Index of the clip edge.
    pub clip_edge: usize,
    /// Parametric position of `point` along the subject edge.
    pub subject_t: f64,
    /// Parametric position of `point` along the clip edge.
    pub clip_u: f64,
}

/// Finds every crossing between the edges of `subject` and `clip`.
///
/// Records are returned subject-edge-major, then clip-edge order. A point
/// shared by two edge pairs (for example at a polygon vertex) is reported
/// once per pair.
#[must_use]
pub fn find_intersections(subject: &[Point2], clip: &[Point2]) -> Vec<IntersectionRecord> {
    let mut records = Vec::new();
    for (i, (s0, s1)) in edges_of(subject).enumerate() {
        for (j, (c0, c1)) in edges_of(clip).enumerate() {
            if let Some((point, t, u)) = segment_segment_intersect_2d(&s0, &s1, &c0, &c1) {
                records.push(IntersectionRecord {
                    point,
                    subject_edge: i,
                    clip_edge: j,
                    subject_t: t,
                    clip_u: u,
                });
            }
        }
    }
    records
}
