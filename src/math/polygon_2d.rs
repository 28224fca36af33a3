use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice * 0.5
}

/// Returns `true` if the polygon winds counter-clockwise.
///
/// Degenerate (zero-area) polygons report `true`.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    signed_area_2d(points) >= 0.0
}

/// Even-odd point-in-polygon test.
///
/// Casts a ray from `point` towards +x and toggles on every edge whose
/// y-range contains the point and whose x-intercept lies at or right of it.
/// Vertical edges always toggle once their y-range matches. Points exactly
/// on the boundary are classified arbitrarily.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut p1 = polygon[n - 1];
    for &p2 in polygon {
        if y > p1.y.min(p2.y) && y <= p1.y.max(p2.y) && x <= p1.x.max(p2.x) {
            // The y-range check excludes horizontal edges here.
            let crosses = p1.x == p2.x || {
                let x_intercept = (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                x <= x_intercept
            };
            if crosses {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}
