use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};

use super::augmented::{AugmentedList, ClipGraph, ListId, VertexRef};

/// Returns the first unvisited entry vertex of the subject list.
#[must_use]
pub fn next_entry(subject: &AugmentedList) -> Option<usize> {
    subject
        .vertices()
        .iter()
        .position(|v| v.is_intersection() && v.is_entry == Some(true) && !v.visited)
}

/// Returns `true` if the subject list has any entry vertex at all.
#[must_use]
pub fn has_entry(subject: &AugmentedList) -> bool {
    subject.vertices().iter().any(|v| v.is_entry == Some(true))
}

/// Stitches the result boundaries from a classified [`ClipGraph`].
///
/// Each component starts at an unvisited subject entry and walks the subject
/// list forward. Reaching an intersection vertex jumps to its partner in the
/// other list. The clip list is walked forward when `clip_forward` is set,
/// backward otherwise. A component closes when the walk returns to its
/// start vertex.
///
/// A walk longer than `step_limit` vertices is abandoned and its points are
/// dropped, as is a closed walk enclosing no area (a lone vertex touch).
pub fn trace_components(
    graph: &mut ClipGraph,
    clip_forward: bool,
    step_limit: usize,
) -> Vec<Vec<Point2>> {
    let mut components = Vec::new();
    while let Some(start) = next_entry(&graph.subject) {
        if let Some(component) = trace_one(graph, start, clip_forward, step_limit) {
            if signed_area_2d(&component).abs() > TOLERANCE {
                components.push(component);
            } else {
                tracing::debug!(start, points = component.len(), "dropping zero-area component");
            }
        } else {
            tracing::warn!(
                start,
                step_limit,
                "clip boundary walk did not close; dropping component"
            );
        }
    }
    components
}

/// Walks one closed component from the subject vertex at `start`.
///
/// The active list (`at.list`) is the walk state: `Subject` advances through
/// `next`, `Clip` through `next` or `prev` depending on `clip_forward`.
fn trace_one(
    graph: &mut ClipGraph,
    start: usize,
    clip_forward: bool,
    step_limit: usize,
) -> Option<Vec<Point2>> {
    let start = VertexRef {
        list: ListId::Subject,
        index: start,
    };
    let mut at = start;
    let mut points = Vec::new();
    graph.vertex_mut(start).visited = true;

    for _ in 0..step_limit {
        let v = graph.vertex_mut(at);
        v.visited = true;
        points.push(v.point);

        let step = match at.list {
            ListId::Subject => v.next,
            ListId::Clip if clip_forward => v.next,
            ListId::Clip => v.prev,
        };
        let ahead = VertexRef {
            list: at.list,
            index: step,
        };

        // Crossings are never emitted from the list being left; the walk
        // continues at the partner vertex on the other boundary.
        at = match graph.vertex(ahead).cross_link {
            Some(link) => link,
            None => ahead,
        };
        if at == start {
            return Some(points);
        }
    }
    None
}
