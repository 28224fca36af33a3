use crate::error::{ClipError, PolygonRole, Result};
use crate::geometry::Polygon;
use crate::math::Point2;
use crate::operations::clip::{Clip, ClipConfig};

/// Which polygon the session is collecting, or whether a result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    EditingSubject,
    EditingClip,
    ShowingResult,
}

/// Colors a [`Renderer`] is asked to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
    Green,
}

impl Color {
    /// RGB components in `[0, 1]`.
    #[must_use]
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Self::Blue => [0.0, 0.0, 1.0],
            Self::Red => [1.0, 0.0, 0.0],
            Self::Green => [0.0, 1.0, 0.0],
        }
    }
}

/// Drawing layer used by [`Session::render`].
pub trait Renderer {
    /// Draws `points` as a closed polyline with a marker on every vertex.
    fn draw_polygon(&mut self, points: &[Point2], color: Color);
}

/// Interactive clipping session.
///
/// Owns the subject, clip and result sequences. Points are appended one at
/// a time to whichever polygon is being edited; [`finalize`](Self::finalize)
/// advances from subject to clip and then runs the clip.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: InputMode,
    subject: Vec<Point2>,
    clip: Vec<Point2>,
    result: Vec<Point2>,
    config: ClipConfig,
}

impl Session {
    /// Creates an empty session with the default clip configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session that clips with `config`.
    #[must_use]
    pub fn with_config(config: ClipConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn subject(&self) -> &[Point2] {
        &self.subject
    }

    #[must_use]
    pub fn clip(&self) -> &[Point2] {
        &self.clip
    }

    /// The last clip result, flattened; empty until a clip has run.
    #[must_use]
    pub fn result(&self) -> &[Point2] {
        &self.result
    }

    /// Appends a vertex to the polygon being edited.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::ResultPending` while a result is shown and
    /// `ClipError::NonFinitePoint` for NaN or infinite coordinates.
    pub fn add_point(&mut self, point: Point2) -> Result<()> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ClipError::NonFinitePoint {
                x: point.x,
                y: point.y,
            });
        }
        match self.mode {
            InputMode::EditingSubject => self.subject.push(point),
            InputMode::EditingClip => self.clip.push(point),
            InputMode::ShowingResult => return Err(ClipError::ResultPending),
        }
        Ok(())
    }

    /// Finishes the polygon being edited.
    ///
    /// Moves from subject to clip editing, or runs the clip and shows the
    /// result. Does nothing while a result is shown.
    ///
    /// # Errors
    ///
    /// Returns `ClipError::InsufficientVertices` if the polygon being
    /// edited has fewer than 3 vertices; the mode is left unchanged.
    pub fn finalize(&mut self) -> Result<InputMode> {
        match self.mode {
            InputMode::EditingSubject => {
                Polygon::new(PolygonRole::Subject, &self.subject)?;
                self.mode = InputMode::EditingClip;
            }
            InputMode::EditingClip => {
                let subject = Polygon::new(PolygonRole::Subject, &self.subject)?;
                let clip = Polygon::new(PolygonRole::Clip, &self.clip)?;
                self.result = Clip::new(subject.vertices(), clip.vertices())
                    .with_config(self.config)
                    .execute()
                    .into_flat();
                tracing::debug!(points = self.result.len(), "session clip finished");
                self.mode = InputMode::ShowingResult;
            }
            InputMode::ShowingResult => {}
        }
        Ok(self.mode)
    }

    /// Discards subject, clip and result and starts over.
    pub fn reset(&mut self) {
        self.subject.clear();
        self.clip.clear();
        self.result.clear();
        self.mode = InputMode::EditingSubject;
    }

    /// Draws the session state: the subject always, the clip once it is
    /// being edited, and the result once computed.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        let mut draw = |points: &[Point2], color| {
            if !points.is_empty() {
                renderer.draw_polygon(points, color);
            }
        };
        draw(&self.subject, Color::Blue);
        if self.mode != InputMode::EditingSubject {
            draw(&self.clip, Color::Red);
        }
        if self.mode == InputMode::ShowingResult {
            draw(&self.result, Color::Green);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::clip::WindingPolicy;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(usize, Color)>,
    }

    impl Renderer for Recorder {
        fn draw_polygon(&mut self, points: &[Point2], color: Color) {
            self.calls.push((points.len(), color));
        }
    }

    fn add_all(session: &mut Session, points: &[(f64, f64)]) {
        for &(x, y) in points {
            session.add_point(Point2::new(x, y)).unwrap();
        }
    }

    fn overlapping_session() -> Session {
        let mut session = Session::new();
        add_all(&mut session, &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(session.finalize().unwrap(), InputMode::EditingClip);
        add_all(&mut session, &[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        assert_eq!(session.finalize().unwrap(), InputMode::ShowingResult);
        session
    }

    #[test]
    fn points_go_to_the_polygon_being_edited() {
        let session = overlapping_session();
        assert_eq!(session.subject().len(), 4);
        assert_eq!(session.clip()[0], Point2::new(1.0, 1.0));
    }

    #[test]
    fn finalize_runs_the_clip() {
        let session = overlapping_session();
        assert_eq!(session.mode(), InputMode::ShowingResult);
        assert_eq!(session.result().len(), 4);
        assert!(session.result().contains(&Point2::new(1.0, 1.0)));
        assert!(session.result().contains(&Point2::new(2.0, 2.0)));
    }

    #[test]
    fn finalize_rejects_short_polygons() {
        let mut session = Session::new();
        add_all(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            session.finalize(),
            Err(ClipError::InsufficientVertices {
                role: PolygonRole::Subject,
                count: 2
            })
        );
        assert_eq!(session.mode(), InputMode::EditingSubject);

        add_all(&mut session, &[(1.0, 1.0)]);
        session.finalize().unwrap();
        assert!(matches!(
            session.finalize(),
            Err(ClipError::InsufficientVertices {
                role: PolygonRole::Clip,
                count: 0
            })
        ));
        assert_eq!(session.mode(), InputMode::EditingClip);
    }

    #[test]
    fn editing_is_locked_while_showing_result() {
        let mut session = overlapping_session();
        assert_eq!(
            session.add_point(Point2::new(5.0, 5.0)),
            Err(ClipError::ResultPending)
        );
        assert_eq!(session.finalize().unwrap(), InputMode::ShowingResult);
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let mut session = Session::new();
        assert!(matches!(
            session.add_point(Point2::new(f64::INFINITY, 0.0)),
            Err(ClipError::NonFinitePoint { .. })
        ));
        assert!(session.subject().is_empty());
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = overlapping_session();
        session.reset();
        assert_eq!(session.mode(), InputMode::EditingSubject);
        assert!(session.subject().is_empty());
        assert!(session.clip().is_empty());
        assert!(session.result().is_empty());
    }

    #[test]
    fn render_follows_the_mode() {
        let mut session = Session::new();
        let mut recorder = Recorder::default();
        session.render(&mut recorder);
        assert!(recorder.calls.is_empty());

        add_all(&mut session, &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        session.render(&mut recorder);
        assert_eq!(recorder.calls, vec![(3, Color::Blue)]);

        let mut recorder = Recorder::default();
        let session = overlapping_session();
        session.render(&mut recorder);
        assert_eq!(
            recorder.calls,
            vec![(4, Color::Blue), (4, Color::Red), (4, Color::Green)]
        );
    }

    #[test]
    fn session_uses_its_clip_config() {
        let config = ClipConfig::default().with_winding(WindingPolicy::AssumeOpposite);
        let mut session = Session::with_config(config);
        add_all(&mut session, &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        session.finalize().unwrap();
        add_all(&mut session, &[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        session.finalize().unwrap();
        assert_eq!(session.result().len(), 6);
    }

    #[test]
    fn color_components() {
        assert_eq!(Color::Green.rgb(), [0.0, 1.0, 0.0]);
    }
}
