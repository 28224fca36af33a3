use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::Point2;

use super::augmented::{ClipGraph, VertexRef};

/// Tags every intersection vertex as an entry into or an exit from `clip`.
///
/// The state starts from the subject's first original vertex tested
/// against the plain clip polygon and flips at each crossing along the
/// subject list. Clip vertices copy the flag of their cross-linked subject
/// vertex.
///
/// Returns whether the subject's first vertex lies inside `clip`.
pub fn mark_entries_exits(graph: &mut ClipGraph, clip: &[Point2]) -> bool {
    let Some(first) = graph.subject.vertices().first() else {
        return false;
    };
    let reference_inside = point_in_polygon_2d(&first.point, clip);

    let mut inside = reference_inside;
    let mut links: Vec<(VertexRef, bool)> = Vec::new();
    for index in 0..graph.subject.len() {
        let v = graph.subject.vertex_mut(index);
        if !v.is_intersection() {
            continue;
        }
        let is_entry = !inside;
        v.is_entry = Some(is_entry);
        inside = !inside;
        if let Some(link) = v.cross_link {
            links.push((link, is_entry));
        }
    }

    for (link, is_entry) in links {
        graph.vertex_mut(link).is_entry = Some(is_entry);
    }

    reference_inside
}

#[cfg(test)]
mod tests {
    use super::super::augmented::ListId;
    use super::super::intersections::find_intersections;
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<Point2> {
        vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ]
    }

    fn classified(subject: &[Point2], clip: &[Point2]) -> (ClipGraph, bool) {
        let records = find_intersections(subject, clip);
        let mut graph = ClipGraph::build(subject, clip, &records);
        let inside = mark_entries_exits(&mut graph, clip);
        (graph, inside)
    }

    fn subject_flags(graph: &ClipGraph) -> Vec<bool> {
        graph
            .subject
            .vertices()
            .iter()
            .filter_map(|v| v.is_entry)
            .collect()
    }

    #[test]
    fn overlapping_squares_enter_then_exit() {
        let (graph, inside) = classified(&square(0.0, 0.0, 2.0), &square(1.0, 1.0, 2.0));
        assert!(!inside);
        assert_eq!(subject_flags(&graph), vec![true, false]);
    }

    #[test]
    fn reference_vertex_inside_starts_with_exit() {
        // Subject starts at (1.5, 1.5), inside the clip square.
        let subject = vec![
            Point2::new(1.5, 1.5),
            Point2::new(4.0, 1.5),
            Point2::new(4.0, 2.5),
            Point2::new(1.5, 2.5),
        ];
        let (graph, inside) = classified(&subject, &square(1.0, 1.0, 2.0));
        assert!(inside);
        assert_eq!(subject_flags(&graph), vec![false, true]);
    }

    #[test]
    fn entries_and_exits_alternate_and_balance() {
        let bar = vec![
            Point2::new(-1.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.0, 2.5),
            Point2::new(-1.0, 2.5),
        ];
        let u_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        let (graph, _) = classified(&bar, &u_shape);
        let flags = subject_flags(&graph);
        assert_eq!(flags.len(), 8);
        assert!(flags.windows(2).all(|w| w[0] != w[1]));
        let entries = flags.iter().filter(|&&e| e).count();
        assert_eq!(entries, flags.len() - entries);
    }

    #[test]
    fn clip_vertices_copy_their_partner_flag() {
        let (graph, _) = classified(&square(0.0, 0.0, 2.0), &square(1.0, 1.0, 2.0));
        for v in graph.clip.vertices() {
            match v.cross_link {
                Some(link) => {
                    assert_eq!(link.list, ListId::Subject);
                    assert_eq!(v.is_entry, graph.vertex(link).is_entry);
                    assert!(v.is_entry.is_some());
                }
                None => assert_eq!(v.is_entry, None),
            }
        }
    }

    #[test]
    fn no_crossings_leaves_flags_unset() {
        let (graph, inside) = classified(&square(1.0, 1.0, 1.0), &square(0.0, 0.0, 4.0));
        assert!(inside);
        assert!(subject_flags(&graph).is_empty());
    }
}
