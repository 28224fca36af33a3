use super::Point2;

/// Bounded segment-segment intersection in 2D.
///
/// Segments are `p1 → p2` and `p3 → p4`. Returns `(intersection_point, t, u)`
/// where `t` is the parameter along the first segment and `u` along the
/// second, both in `[0, 1]` inclusive, so touching endpoints count as hits.
///
/// Parallel and collinear segments (zero denominator) never intersect, even
/// when they overlap.
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn segment_segment_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Option<(Point2, f64, f64)> {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x, p3.y);
    let (x4, y4) = (p4.x, p4.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((*p1 + (p2 - p1) * t, t, u))
    } else {
        None
    }
}
