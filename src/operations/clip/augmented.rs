use crate::math::Point2;

use super::intersections::IntersectionRecord;

/// Identifies one of the two augmented lists of a clip computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListId {
    Subject,
    Clip,
}

impl ListId {
    /// The list on the other side of a cross-link.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Subject => Self::Clip,
            Self::Clip => Self::Subject,
        }
    }
}

/// Index of a vertex inside one of the two augmented lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    pub list: ListId,
    pub index: usize,
}

/// A vertex of an augmented boundary list.
///
/// Original polygon vertices have `record == None` and never carry
/// `is_entry` or `cross_link`.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedVertex {
    pub point: Point2,
    /// Originating intersection record, for inserted vertices.
    pub record: Option<usize>,
    pub is_entry: Option<bool>,
    pub cross_link: Option<VertexRef>,
    pub next: usize,
    pub prev: usize,
    pub visited: bool,
}

impl AugmentedVertex {
    fn original(point: Point2) -> Self {
        Self {
            point,
            record: None,
            is_entry: None,
            cross_link: None,
            next: 0,
            prev: 0,
            visited: false,
        }
    }

    fn intersection(point: Point2, record: usize) -> Self {
        Self {
            record: Some(record),
            ..Self::original(point)
        }
    }

    /// Returns `true` for vertices inserted at an edge crossing.
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.record.is_some()
    }
}

/// Circular boundary of one polygon with its crossings inserted in edge order.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedList {
    id: ListId,
    vertices: Vec<AugmentedVertex>,
}

impl AugmentedList {
    /// Builds the augmented list for `polygon`.
    ///
    /// `id` selects which edge index and parameter of each record apply:
    /// the subject side for [`ListId::Subject`], the clip side otherwise.
    /// Crossings on the same edge are ordered by their parameter along it,
    /// ties by record id, so repeated builds produce identical lists.
    #[must_use]
    pub fn build(id: ListId, polygon: &[Point2], records: &[IntersectionRecord]) -> Self {
        let n = polygon.len();
        let mut by_edge: Vec<Vec<(f64, usize)>> = vec![Vec::new(); n];
        for (rid, r) in records.iter().enumerate() {
            let (edge, param) = match id {
                ListId::Subject => (r.subject_edge, r.subject_t),
                ListId::Clip => (r.clip_edge, r.clip_u),
            };
            if let Some(group) = by_edge.get_mut(edge) {
                group.push((param, rid));
            }
        }

        let mut vertices = Vec::with_capacity(n + records.len());
        for (start, group) in polygon.iter().zip(by_edge.iter_mut()) {
            group.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            vertices.push(AugmentedVertex::original(*start));
            vertices.extend(
                group
                    .iter()
                    .map(|&(_, rid)| AugmentedVertex::intersection(records[rid].point, rid)),
            );
        }

        let len = vertices.len();
        for (k, v) in vertices.iter_mut().enumerate() {
            v.next = (k + 1) % len;
            v.prev = (k + len - 1) % len;
        }

        Self { id, vertices }
    }

    /// Which side of the computation this list belongs to.
    #[must_use]
    pub fn id(&self) -> ListId {
        self.id
    }

    #[must_use]
    pub fn vertices(&self) -> &[AugmentedVertex] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of inserted intersection vertices.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_intersection()).count()
    }

    /// Points of the original polygon, in order, without inserted crossings.
    #[must_use]
    pub fn original_points(&self) -> Vec<Point2> {
        self.vertices
            .iter()
            .filter(|v| !v.is_intersection())
            .map(|v| v.point)
            .collect()
    }

    /// Maps each record id to the index of its vertex in this list.
    fn record_positions(&self, record_count: usize) -> Vec<Option<usize>> {
        let mut positions = vec![None; record_count];
        for (index, v) in self.vertices.iter().enumerate() {
            if let Some(rid) = v.record.filter(|&rid| rid < record_count) {
                positions[rid] = Some(index);
            }
        }
        positions
    }

    pub(crate) fn vertex_mut(&mut self, index: usize) -> &mut AugmentedVertex {
        &mut self.vertices[index]
    }
}

/// The subject and clip augmented lists of one clip computation.
///
/// Owns every intermediate vertex; dropped when the computation returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipGraph {
    pub subject: AugmentedList,
    pub clip: AugmentedList,
}

impl ClipGraph {
    /// Builds both augmented lists and cross-links every crossing pair.
    #[must_use]
    pub fn build(subject: &[Point2], clip: &[Point2], records: &[IntersectionRecord]) -> Self {
        let mut graph = Self {
            subject: AugmentedList::build(ListId::Subject, subject, records),
            clip: AugmentedList::build(ListId::Clip, clip, records),
        };
        graph.cross_link(records.len());
        graph
    }

    fn cross_link(&mut self, record_count: usize) {
        let subject_pos = self.subject.record_positions(record_count);
        let clip_pos = self.clip.record_positions(record_count);
        for (s, c) in subject_pos.into_iter().zip(clip_pos) {
            if let (Some(s), Some(c)) = (s, c) {
                self.subject.vertex_mut(s).cross_link = Some(VertexRef {
                    list: ListId::Clip,
                    index: c,
                });
                self.clip.vertex_mut(c).cross_link = Some(VertexRef {
                    list: ListId::Subject,
                    index: s,
                });
            }
        }
    }

    #[must_use]
    pub fn list(&self, id: ListId) -> &AugmentedList {
        match id {
            ListId::Subject => &self.subject,
            ListId::Clip => &self.clip,
        }
    }

    pub(crate) fn list_mut(&mut self, id: ListId) -> &mut AugmentedList {
        match id {
            ListId::Subject => &mut self.subject,
            ListId::Clip => &mut self.clip,
        }
    }

    #[must_use]
    pub fn vertex(&self, at: VertexRef) -> &AugmentedVertex {
        &self.list(at.list).vertices[at.index]
    }

    pub(crate) fn vertex_mut(&mut self, at: VertexRef) -> &mut AugmentedVertex {
        self.list_mut(at.list).vertex_mut(at.index)
    }
}
