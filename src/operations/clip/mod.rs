mod augmented;
mod classify;
mod intersections;
mod trace;

pub use augmented::{AugmentedList, AugmentedVertex, ClipGraph, ListId, VertexRef};
pub use classify::mark_entries_exits;
pub use intersections::{find_intersections, IntersectionRecord};
pub use trace::trace_components;

use crate::math::polygon_2d::{is_counter_clockwise, point_in_polygon_2d};
use crate::math::Point2;

/// How the clip boundary is walked while stitching the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingPolicy {
    /// Walk the clip list forward when both polygons share a winding,
    /// backward when they are wound oppositely.
    #[default]
    Auto,
    /// Always walk the clip list backward; input is expected to be wound
    /// opposite to the subject.
    AssumeOpposite,
}

/// Tuning for a [`Clip`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipConfig {
    pub winding: WindingPolicy,
    /// Maximum vertices a single result boundary may visit. `None` uses
    /// the combined length of both augmented lists plus one.
    pub trace_step_limit: Option<usize>,
}

impl ClipConfig {
    #[must_use]
    pub fn with_winding(mut self, winding: WindingPolicy) -> Self {
        self.winding = winding;
        self
    }

    #[must_use]
    pub fn with_trace_step_limit(mut self, limit: usize) -> Self {
        self.trace_step_limit = Some(limit);
        self
    }
}

/// Result of a [`Clip`] operation: zero or more closed boundaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClipOutput {
    components: Vec<Vec<Point2>>,
    intersection_count: usize,
}

impl ClipOutput {
    /// The closed result boundaries, in the order they were traced.
    #[must_use]
    pub fn components(&self) -> &[Vec<Point2>] {
        &self.components
    }

    /// Returns `true` if the polygons do not overlap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of edge crossings found between subject and clip.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.intersection_count
    }

    #[must_use]
    pub fn into_components(self) -> Vec<Vec<Point2>> {
        self.components
    }

    /// Concatenates all boundaries into one point sequence.
    #[must_use]
    pub fn into_flat(self) -> Vec<Point2> {
        self.components.into_iter().flatten().collect()
    }
}

/// Clips a subject polygon against a clip polygon (Weiler–Atherton).
///
/// Computes the region covered by both polygons. Inputs are simple, closed
/// vertex rings without a repeated closing vertex; neither is modified.
#[derive(Debug, Clone)]
pub struct Clip<'a> {
    subject: &'a [Point2],
    clip: &'a [Point2],
    config: ClipConfig,
}

impl<'a> Clip<'a> {
    /// Creates a new `Clip` operation with the default configuration.
    #[must_use]
    pub fn new(subject: &'a [Point2], clip: &'a [Point2]) -> Self {
        Self {
            subject,
            clip,
            config: ClipConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ClipConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the clip.
    ///
    /// Never fails: polygons with fewer than 3 vertices give an empty
    /// output, and when the boundaries never cross the subject is returned
    /// unchanged if its first vertex lies inside the clip polygon.
    #[must_use]
    pub fn execute(&self) -> ClipOutput {
        let (subject, clip) = (self.subject, self.clip);
        if subject.len() < 3 || clip.len() < 3 {
            tracing::debug!(
                subject = subject.len(),
                clip = clip.len(),
                "polygon with fewer than 3 vertices; nothing to clip"
            );
            return ClipOutput::default();
        }

        // Step 1: Edge crossings.
        let records = find_intersections(subject, clip);
        tracing::debug!(intersections = records.len(), "found edge crossings");
        if records.is_empty() {
            let inside = point_in_polygon_2d(&subject[0], clip);
            return containment_fallback(subject, inside, 0);
        }

        // Step 2: Augmented lists with cross-links.
        let mut graph = ClipGraph::build(subject, clip, &records);

        // Step 3: Entry/exit flags.
        let reference_inside = mark_entries_exits(&mut graph, clip);
        if !trace::has_entry(&graph.subject) {
            return containment_fallback(subject, reference_inside, records.len());
        }

        // Step 4: Stitch result boundaries.
        let clip_forward = match self.config.winding {
            WindingPolicy::Auto => is_counter_clockwise(subject) == is_counter_clockwise(clip),
            WindingPolicy::AssumeOpposite => false,
        };
        let step_limit = self
            .config
            .trace_step_limit
            .unwrap_or(graph.subject.len() + graph.clip.len() + 1);
        let components = trace_components(&mut graph, clip_forward, step_limit);
        tracing::debug!(components = components.len(), clip_forward, "traced result");

        ClipOutput {
            components,
            intersection_count: records.len(),
        }
    }
}

/// Subject unchanged when its reference vertex is inside the clip, else nothing.
///
/// Cannot tell a clip polygon lying inside the subject from disjoint input.
fn containment_fallback(subject: &[Point2], inside: bool, intersection_count: usize) -> ClipOutput {
    tracing::debug!(inside, "no entry crossing; using containment test");
    ClipOutput {
        components: if inside {
            vec![subject.to_vec()]
        } else {
            Vec::new()
        },
        intersection_count,
    }
}

/// Clips `subject` against `clip`, returning every result boundary as one
/// flat point sequence.
#[must_use]
pub fn clip(subject: &[Point2], clip: &[Point2]) -> Vec<Point2> {
    Clip::new(subject, clip).execute().into_flat()
}

/// Clips `subject` against `clip`, keeping each result boundary separate.
#[must_use]
pub fn clip_components(subject: &[Point2], clip: &[Point2]) -> Vec<Vec<Point2>> {
    Clip::new(subject, clip).execute().into_components()
}
